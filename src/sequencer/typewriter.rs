/// Progressive reveal of a fixed text, one character per tick.
///
/// Units are Unicode scalar values, so multi-byte text never splits inside a character.
/// The buffer starts empty and never goes past the full text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterBuffer {
    full_text: String,
    total: usize,
    revealed: usize,
}

impl TypewriterBuffer {
    /// Buffer over `full_text` with nothing revealed.
    pub fn new(full_text: impl Into<String>) -> Self {
        let full_text = full_text.into();
        let total = full_text.chars().count();
        Self {
            full_text,
            total,
            revealed: 0,
        }
    }

    /// Reveal one more character. Returns false once the text is complete.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    /// Characters revealed so far.
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// Characters in the full text.
    pub fn total_len(&self) -> usize {
        self.total
    }

    /// Every character is revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed >= self.total
    }

    /// The revealed prefix.
    pub fn revealed_text(&self) -> &str {
        let end = self
            .full_text
            .char_indices()
            .nth(self.revealed)
            .map_or(self.full_text.len(), |(byte, _)| byte);
        &self.full_text[..end]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/typewriter.rs"]
mod tests;
