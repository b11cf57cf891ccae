use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// The character sequence being scrambled. Every operation consumes the
/// password and hands back the edited one, so the length and the multiset of
/// characters never change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Password(Vec<char>);

impl Password {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    /// Highest index at which `letter` appears.
    pub fn rindex(&self, letter: char) -> anyhow::Result<usize> {
        self.0
            .iter()
            .rposition(|&c| c == letter)
            .ok_or_else(|| anyhow!("Letter {} is not in the password {}", letter, self))
    }

    fn check_index(&self, index: usize) -> anyhow::Result<()> {
        if index >= self.0.len() {
            anyhow::bail!(
                "Position {} is out of range for the password {} of length {}",
                index,
                self,
                self.0.len()
            );
        }
        Ok(())
    }

    pub fn swap_position(mut self, x: usize, y: usize) -> anyhow::Result<Self> {
        self.check_index(x)?;
        self.check_index(y)?;
        self.0.swap(x, y);
        Ok(self)
    }

    pub fn swap_letter(self, a: char, b: char) -> anyhow::Result<Self> {
        let x = self.rindex(a)?;
        let y = self.rindex(b)?;
        self.swap_position(x, y)
    }

    pub fn rotate_steps(mut self, direction: Direction, steps: usize) -> anyhow::Result<Self> {
        if self.0.is_empty() {
            return Ok(self);
        }
        let steps = steps % self.0.len();
        match direction {
            Direction::Left => self.0.rotate_left(steps),
            Direction::Right => self.0.rotate_right(steps),
        };
        Ok(self)
    }

    /// Rotates right once, then once per position before the letter's
    /// rightmost index, plus one more if that index was at least 4.
    pub fn rotate_position(self, letter: char) -> anyhow::Result<Self> {
        let index = self.rindex(letter)?;
        let steps = if index >= 4 { index + 2 } else { index + 1 };
        self.rotate_steps(Direction::Right, steps)
    }

    pub fn reverse_positions(mut self, x: usize, y: usize) -> anyhow::Result<Self> {
        if x > y {
            anyhow::bail!("Can't reverse positions {} through {}, start is after end", x, y);
        }
        self.check_index(y)?;
        self.0[x..=y].reverse();
        Ok(self)
    }

    pub fn move_position(mut self, x: usize, y: usize) -> anyhow::Result<Self> {
        self.check_index(x)?;
        self.check_index(y)?;
        let moving = self.0.remove(x);
        self.0.insert(y, moving);
        Ok(self)
    }

    /// Sorted copy of the characters, used to compare letter multisets.
    pub fn letters(&self) -> Vec<char> {
        let mut letters = self.0.clone();
        letters.sort_unstable();
        letters
    }
}

impl From<&str> for Password {
    fn from(string: &str) -> Self {
        Self(string.chars().collect())
    }
}

impl From<String> for Password {
    fn from(string: String) -> Self {
        string.as_str().into()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.0.into_iter().collect()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(string: &str) -> Password {
        string.into()
    }

    #[test]
    fn swap_position() {
        let scrambled = password("abcde").swap_position(4, 0).unwrap();
        assert_eq!(scrambled.to_string(), "ebcda");
    }

    #[test]
    fn swap_letter() {
        let scrambled = password("ebcda").swap_letter('d', 'b').unwrap();
        assert_eq!(scrambled.to_string(), "edcba");
    }

    #[test]
    fn swap_letter_uses_rightmost_occurrence() {
        let scrambled = password("abcab").swap_letter('a', 'c').unwrap();
        assert_eq!(scrambled.to_string(), "abacb");
    }

    #[test]
    fn reverse_positions() {
        let scrambled = password("edcba").reverse_positions(0, 4).unwrap();
        assert_eq!(scrambled.to_string(), "abcde");

        let scrambled = password("abcdefgh").reverse_positions(2, 5).unwrap();
        assert_eq!(scrambled.to_string(), "abfedcgh");
    }

    #[test]
    fn rotate_steps() {
        let scrambled = password("abcde").rotate_steps(Direction::Left, 1).unwrap();
        assert_eq!(scrambled.to_string(), "bcdea");

        let scrambled = password("abcde").rotate_steps(Direction::Right, 7).unwrap();
        assert_eq!(scrambled.to_string(), "deabc");
    }

    #[test]
    fn rotate_position() {
        let scrambled = password("abdec").rotate_position('b').unwrap();
        assert_eq!(scrambled.to_string(), "ecabd");

        // index 4 gets the extra step: 6 steps right on 5 letters
        let scrambled = password("ecabd").rotate_position('d').unwrap();
        assert_eq!(scrambled.to_string(), "decab");
    }

    #[test]
    fn rotate_position_extra_step_starts_at_index_4() {
        // index 3: 4 steps right
        let scrambled = password("abcdefgh").rotate_position('d').unwrap();
        assert_eq!(scrambled.to_string(), "efghabcd");

        // index 4: 6 steps right
        let scrambled = password("abcdefgh").rotate_position('e').unwrap();
        assert_eq!(scrambled.to_string(), "cdefghab");
    }

    #[test]
    fn move_position() {
        let scrambled = password("bcdea").move_position(1, 4).unwrap();
        assert_eq!(scrambled.to_string(), "bdeac");

        let scrambled = password("bdeac").move_position(3, 0).unwrap();
        assert_eq!(scrambled.to_string(), "abdec");
    }

    #[test]
    fn swap_position_twice_is_identity() {
        let original = password("abcdefgh");
        for x in 0..original.len() {
            for y in 0..original.len() {
                let twice = original
                    .clone()
                    .swap_position(x, y)
                    .and_then(|p| p.swap_position(x, y))
                    .unwrap();
                assert_eq!(twice, original);
            }
        }
    }

    #[test]
    fn reverse_positions_twice_is_identity() {
        let original = password("abcdefgh");
        for x in 0..original.len() {
            for y in x..original.len() {
                let twice = original
                    .clone()
                    .reverse_positions(x, y)
                    .and_then(|p| p.reverse_positions(x, y))
                    .unwrap();
                assert_eq!(twice, original);
            }
        }
    }

    #[test]
    fn rotate_left_then_right_is_identity() {
        let original = password("abcdefgh");
        for steps in 0..20 {
            let back = original
                .clone()
                .rotate_steps(Direction::Left, steps)
                .and_then(|p| p.rotate_steps(Direction::Right, steps))
                .unwrap();
            assert_eq!(back, original);
        }
    }

    #[test]
    fn operations_keep_the_same_letters() {
        let original = password("aabcdeff");
        let letters = original.letters();

        let results = vec![
            original.clone().swap_position(1, 6),
            original.clone().swap_letter('a', 'f'),
            original.clone().rotate_steps(Direction::Right, 3),
            original.clone().rotate_position('c'),
            original.clone().reverse_positions(2, 7),
            original.clone().move_position(7, 0),
        ];

        for result in results {
            assert_eq!(result.unwrap().letters(), letters);
        }
    }

    #[test]
    fn out_of_range_positions_are_errors() {
        assert!(password("abc").swap_position(0, 3).is_err());
        assert!(password("abc").move_position(3, 0).is_err());
        assert!(password("abc").reverse_positions(1, 3).is_err());
        assert!(password("abc").reverse_positions(2, 1).is_err());
        assert!(password("abc").rotate_position('z').is_err());
        assert!(password("abab").swap_letter('a', 'x').is_err());
    }

    #[test]
    fn rotating_empty_password_is_noop() {
        let scrambled = Password::default()
            .rotate_steps(Direction::Left, 3)
            .unwrap();
        assert!(scrambled.is_empty());
    }
}
