use clap::Parser;

#[derive(Parser)]
#[command(name = "paritydeck")]
#[command(about = "Hotel rate parity analytics dashboard")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the bundled mock datasets as JSON and exit
    #[arg(long)]
    dump_data: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.dump_data {
        println!("{}", serde_json::to_string_pretty(&paritydeck::data::all())?);
        return Ok(());
    }

    if args.verbose {
        let records = paritydeck::data::parity_records();
        println!(
            "Loaded {} parity records, {} demand days",
            records.len(),
            paritydeck::data::demand_days().len()
        );
    }

    #[cfg(feature = "gui")]
    {
        paritydeck::gui::run()
            .map_err(|e| anyhow::anyhow!("failed to start the dashboard: {e}"))?;
    }

    #[cfg(not(feature = "gui"))]
    println!("Built without the gui feature; use --dump-data to inspect the datasets.");

    Ok(())
}
