use advent_puzzles::{
    scrambler::{Instruction, Scrambler},
    util,
};
use serde::Serialize;

lazy_static::lazy_static! {
    static ref INSTRUCTIONS_FILE: String = util::setting(1, "SCRAMBLER_INPUT", "input.txt");
    static ref PASSWORD: String = util::setting(2, "SCRAMBLER_PASSWORD", "abcdefgh");
}

#[derive(Serialize)]
struct Step {
    step: usize,
    instruction: Instruction,
    password: String,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let scrambler = Scrambler::from_file(INSTRUCTIONS_FILE.as_str())?;

    let scrambled = if util::flag("SCRAMBLER_TRACE") {
        let mut trace = vec![];
        let scrambled = scrambler.encode_with(PASSWORD.as_str(), |step, instruction, password| {
            trace.push(Step {
                step,
                instruction: *instruction,
                password: password.to_string(),
            })
        })?;
        for step in &trace {
            println!("{}", serde_json::to_string(step)?);
        }
        scrambled
    } else {
        scrambler.encode(PASSWORD.as_str())?
    };

    log::info!(
        "Scrambled {} with {} Instructions",
        *PASSWORD,
        scrambler.instructions().len()
    );
    println!("{}", scrambled);

    Ok(())
}
