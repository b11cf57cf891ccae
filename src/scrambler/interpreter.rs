use super::{parse, Direction, Password};
use anyhow::Context;
use std::{fmt, path::Path, str::FromStr};

/// One edit of the password.
#[enum_dispatch(Instruction)]
pub trait Operation {
    fn apply(&self, password: Password) -> anyhow::Result<Password>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwapPosition {
    pub x: usize,
    pub y: usize,
}

impl Operation for SwapPosition {
    fn apply(&self, password: Password) -> anyhow::Result<Password> {
        password.swap_position(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwapLetter {
    pub a: char,
    pub b: char,
}

impl Operation for SwapLetter {
    fn apply(&self, password: Password) -> anyhow::Result<Password> {
        password.swap_letter(self.a, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RotateSteps {
    pub direction: Direction,
    pub steps: usize,
}

impl Operation for RotateSteps {
    fn apply(&self, password: Password) -> anyhow::Result<Password> {
        password.rotate_steps(self.direction, self.steps)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RotatePosition {
    pub letter: char,
}

impl Operation for RotatePosition {
    fn apply(&self, password: Password) -> anyhow::Result<Password> {
        password.rotate_position(self.letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReversePositions {
    pub x: usize,
    pub y: usize,
}

impl Operation for ReversePositions {
    fn apply(&self, password: Password) -> anyhow::Result<Password> {
        password.reverse_positions(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovePosition {
    pub x: usize,
    pub y: usize,
}

impl Operation for MovePosition {
    fn apply(&self, password: Password) -> anyhow::Result<Password> {
        password.move_position(self.x, self.y)
    }
}

#[enum_dispatch]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Instruction {
    SwapPosition(SwapPosition),
    SwapLetter(SwapLetter),
    RotateSteps(RotateSteps),
    RotatePosition(RotatePosition),
    ReversePositions(ReversePositions),
    MovePosition(MovePosition),
}

// Renders the instruction back in the same words it is parsed from.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Instruction::SwapPosition(op) => {
                write!(f, "swap position {} with position {}", op.x, op.y)
            }
            Instruction::SwapLetter(op) => write!(f, "swap letter {} with letter {}", op.a, op.b),
            Instruction::RotateSteps(op) => {
                let unit = if op.steps == 1 { "step" } else { "steps" };
                write!(f, "rotate {} {} {}", op.direction, op.steps, unit)
            }
            Instruction::RotatePosition(op) => {
                write!(f, "rotate based on position of letter {}", op.letter)
            }
            Instruction::ReversePositions(op) => {
                write!(f, "reverse positions {} through {}", op.x, op.y)
            }
            Instruction::MovePosition(op) => {
                write!(f, "move position {} to position {}", op.x, op.y)
            }
        }
    }
}

/// An instruction list, applied top to bottom to whatever password gets encoded.
#[derive(Debug, Clone, Default)]
pub struct Scrambler {
    instructions: Vec<Instruction>,
}

impl Scrambler {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let scrambler: Self = crate::util::read_input(path)?.parse()?;
        debug!("Loaded {} Instructions", scrambler.instructions.len());
        Ok(scrambler)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn encode(&self, password: impl AsRef<str>) -> anyhow::Result<String> {
        self.encode_with(password, |_, _, _| {})
    }

    /// Like `encode`, but calls `inspect` with the step number, the instruction
    /// and the password right after each instruction is applied.
    pub fn encode_with<F>(
        &self,
        password: impl AsRef<str>,
        mut inspect: F,
    ) -> anyhow::Result<String>
    where
        F: FnMut(usize, &Instruction, &Password),
    {
        let original = Password::from(password.as_ref());
        let mut password = original.clone();

        for (step, instruction) in self.instructions.iter().enumerate() {
            password = instruction.apply(password).with_context(|| {
                format!("Couldn't apply instruction {} ({})", step + 1, instruction)
            })?;
            debug!("{}: {} -> {}", step + 1, instruction, password);
            inspect(step + 1, instruction, &password);
        }

        debug_assert_eq!(password.letters(), original.letters());

        Ok(password.into())
    }
}

impl FromStr for Scrambler {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(parse(string)?))
    }
}
