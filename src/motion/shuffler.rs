use super::phase::Generation;

/// A stack of cards that cycles by moving the last card to the front.
#[derive(Clone, Debug, PartialEq)]
pub struct Shuffler {
    items: Vec<String>,
    generation: Generation,
}

impl Shuffler {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn rotate(&mut self) {
        if self.items.len() > 1 {
            self.items.rotate_right(1);
        }
    }

    pub fn reset(&mut self, items: Vec<String>) {
        self.items = items;
        self.generation = self.generation.wrapping_add(1);
    }
}

/// Where a card sits in the visual stack. Purely a function of its index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub translate_y_px: f64,
    pub scale: f64,
    pub z_index: i32,
    pub opacity: f64,
}

impl CardTransform {
    pub fn to_style(self) -> String {
        format!(
            "transform: translateY({}px) scale({}); z-index: {}; opacity: {};",
            self.translate_y_px, self.scale, self.z_index, self.opacity
        )
    }
}

pub fn card_transform(index: usize) -> CardTransform {
    let i = index as f64;
    CardTransform {
        translate_y_px: -18.0 * i,
        scale: 1.0 - 0.04 * i,
        z_index: 10 - index as i32,
        opacity: (1.0 - 0.15 * i).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cards(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("card {i}")).collect()
    }

    #[test]
    fn rotate_moves_last_to_front() {
        let mut s = Shuffler::new(vec!["a".into(), "b".into(), "c".into()]);
        s.rotate();
        assert_eq!(s.items(), ["c", "a", "b"]);
        s.rotate();
        assert_eq!(s.items(), ["b", "c", "a"]);
    }

    #[test]
    fn single_card_never_moves() {
        let mut s = Shuffler::new(cards(1));
        for _ in 0..25 {
            s.rotate();
        }
        assert_eq!(s.items(), cards(1).as_slice());
    }

    #[test]
    fn empty_stack_is_tolerated() {
        let mut s = Shuffler::new(Vec::new());
        s.rotate();
        assert!(s.items().is_empty());
    }

    #[test]
    fn reset_replaces_wholesale() {
        let mut s = Shuffler::new(cards(7));
        s.rotate();
        s.rotate();
        let gen = s.generation();

        let english: Vec<String> = vec!["January".into(), "April".into()];
        s.reset(english.clone());
        assert_eq!(s.items(), english.as_slice());
        assert_eq!(s.generation(), gen + 1);
    }

    #[test]
    fn front_card_is_unshifted_and_on_top() {
        let top = card_transform(0);
        assert_eq!(top.translate_y_px, 0.0);
        assert_eq!(top.scale, 1.0);
        assert_eq!(top.z_index, 10);
        assert_eq!(top.opacity, 1.0);

        let third = card_transform(2);
        assert_eq!(third.translate_y_px, -36.0);
        assert!((third.scale - 0.92).abs() < 1e-9);
        assert_eq!(third.z_index, 8);
        assert!((third.opacity - 0.7).abs() < 1e-9);
    }

    #[test]
    fn deep_cards_fade_out_instead_of_going_negative() {
        assert_eq!(card_transform(9).opacity, 0.0);
    }

    proptest! {
        #[test]
        fn n_rotations_round_trip(n in 1usize..20) {
            let original = cards(n);
            let mut s = Shuffler::new(original.clone());
            for _ in 0..n {
                s.rotate();
            }
            prop_assert_eq!(s.items(), original.as_slice());
        }

        #[test]
        fn rotation_keeps_length(n in 0usize..20, ticks in 0usize..50) {
            let mut s = Shuffler::new(cards(n));
            for _ in 0..ticks {
                s.rotate();
            }
            prop_assert_eq!(s.items().len(), n);
        }
    }
}
