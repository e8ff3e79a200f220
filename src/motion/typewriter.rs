use super::phase::{Generation, Phase};

/// Reveals `target` one character per tick.
///
/// The cursor counts chars, not bytes, so `visible()` always lands on a char
/// boundary ("Ökologie" is 8 ticks, not 9).
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    target: String,
    cursor: usize,
    len: usize,
    phase: Phase,
    generation: Generation,
}

impl Typewriter {
    pub fn new(target: impl Into<String>) -> Self {
        Self::with_generation(target.into(), 0)
    }

    fn with_generation(target: String, generation: Generation) -> Self {
        let len = target.chars().count();
        let phase = if len == 0 { Phase::Complete } else { Phase::Idle };
        Self {
            target,
            cursor: 0,
            len,
            phase,
            generation,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_complete(&self) -> bool {
        self.phase().is_complete()
    }

    /// Shows one more character. Returns false once there is nothing left to reveal.
    pub fn tick(&mut self) -> bool {
        if self.phase.is_complete() {
            return false;
        }
        self.cursor += 1;
        self.phase = if self.cursor >= self.len {
            Phase::Complete
        } else {
            Phase::Running
        };
        true
    }

    pub fn visible(&self) -> &str {
        match self.target.char_indices().nth(self.cursor) {
            Some((end, _)) => &self.target[..end],
            None => &self.target,
        }
    }

    /// Starts over against a new target. Always bumps the generation, even if
    /// the text is unchanged, so pending ticks of the old run are discarded.
    pub fn reset(&mut self, target: impl Into<String>) {
        *self = Self::with_generation(target.into(), self.generation.wrapping_add(1));
    }

    pub fn finish(&mut self) {
        self.cursor = self.len;
        self.phase = Phase::Complete;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal_all(tw: &mut Typewriter) -> Vec<String> {
        let mut frames = vec![tw.visible().to_string()];
        while tw.tick() {
            frames.push(tw.visible().to_string());
        }
        frames
    }

    #[test]
    fn reveals_prefixes_in_order() {
        let mut tw = Typewriter::new("ABC");
        assert_eq!(reveal_all(&mut tw), vec!["", "A", "AB", "ABC"]);
        assert!(tw.is_complete());
    }

    #[test]
    fn extra_ticks_after_completion_change_nothing() {
        let mut tw = Typewriter::new("ABC");
        reveal_all(&mut tw);
        for _ in 0..10 {
            assert!(!tw.tick());
        }
        assert_eq!(tw.visible(), "ABC");
        assert_eq!(tw.cursor(), 3);
    }

    #[test]
    fn empty_target_is_immediately_complete() {
        let mut tw = Typewriter::new("");
        assert_eq!(tw.phase(), Phase::Complete);
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn phases_follow_idle_running_complete() {
        let mut tw = Typewriter::new("ab");
        assert_eq!(tw.phase(), Phase::Idle);
        tw.tick();
        assert_eq!(tw.phase(), Phase::Running);
        tw.tick();
        assert_eq!(tw.phase(), Phase::Complete);
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        let mut tw = Typewriter::new("Ökologie 100%");
        tw.tick();
        assert_eq!(tw.visible(), "Ö");
        tw.tick();
        assert_eq!(tw.visible(), "Ök");
        let frames = reveal_all(&mut tw);
        assert_eq!(frames.last().map(String::as_str), Some("Ökologie 100%"));
    }

    #[test]
    fn reset_mid_reveal_starts_from_zero_on_new_text() {
        let mut tw = Typewriter::new("Umstellung");
        tw.tick();
        tw.tick();
        let before = tw.generation();

        tw.reset("Conversion");
        assert_eq!(tw.cursor(), 0);
        assert_eq!(tw.visible(), "");
        assert_ne!(tw.generation(), before);

        let frames = reveal_all(&mut tw);
        assert!(frames.iter().all(|f| "Conversion".starts_with(f.as_str())));
    }

    #[test]
    fn finish_jumps_to_full_text() {
        let mut tw = Typewriter::new("Bioland");
        tw.finish();
        assert_eq!(tw.visible(), "Bioland");
        assert!(tw.is_complete());
    }
}
