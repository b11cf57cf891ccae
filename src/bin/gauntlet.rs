use advent_puzzles::{gauntlet::Firewall, util};

lazy_static::lazy_static! {
    static ref INPUT_FILE: String = util::setting(1, "GAUNTLET_INPUT", "input.txt");
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let firewall = Firewall::from_file(INPUT_FILE.as_str())?;

    println!("Severity: {}", firewall.severity()?);
    println!("Delay: {}", firewall.first_safe_delay()?);

    Ok(())
}
