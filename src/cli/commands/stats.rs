use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calendar::summarize;
use crate::core::dashboard::Dashboard;
use crate::core::repository::EntryRepository;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::table::{Column, Table};

const BAR_WIDTH: usize = 30;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { today } = &cli.command {
        let reference = date::reference_date(today.as_deref())?;
        let (mut pool, session) = open_session(cli, cfg)?;
        let dash = Dashboard::new(
            session,
            EntryRepository::new(&mut pool),
            cfg.recent_limit,
        );

        let owner = dash.owner()?;
        let summary = summarize(&dash.entries()?, reference);

        header(format!("Stats for {} as of {}", owner, reference));
        println!("Days rated     : {}", summary.total);
        match summary.average {
            Some(avg) => println!("Average level  : {:.2}", avg),
            None => println!("Average level  : --"),
        }
        println!("Current streak : {} day(s)", summary.current_streak);
        println!("Longest streak : {} day(s)", summary.longest_streak);
        println!();

        let max = summary.histogram.iter().copied().max().unwrap_or(0).max(1);
        let mut table = Table::new(vec![
            Column {
                header: "level".into(),
                width: 5,
            },
            Column {
                header: "days".into(),
                width: 5,
            },
            Column {
                header: "".into(),
                width: BAR_WIDTH,
            },
        ]);
        for (i, count) in summary.histogram.iter().enumerate() {
            let bar = "#".repeat(count * BAR_WIDTH / max);
            table.add_row(vec![(i + 1).to_string(), count.to_string(), bar]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
