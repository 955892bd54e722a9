use crate::config::{self, Timings};
use crate::schedule::{Scheduled, Task};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    Hidden,
    Visible,
}

/// Inline style values for a card. An empty string leaves the stylesheet in charge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub opacity: &'static str,
    pub transform: String,
    pub transition: &'static str,
}

impl CardState {
    pub fn style(self) -> CardStyle {
        match self {
            // Hidden cards jump straight to their start position, no transition.
            CardState::Hidden => CardStyle {
                opacity: "0",
                transform: format!("translateY({}px)", config::CARD_OFFSET_PX),
                transition: "",
            },
            CardState::Visible => CardStyle {
                opacity: "1",
                transform: "translateY(0)".to_string(),
                transition: config::CARD_TRANSITION,
            },
        }
    }
}

pub fn entrance_delay_ms(index: usize, timings: &Timings) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    timings
        .card_base_delay_ms
        .saturating_add(index.saturating_mul(timings.card_stagger_ms))
}

/// Staggered fade-in of the feature cards found at load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardEntrance {
    cards: Vec<CardState>,
}

impl CardEntrance {
    pub fn hide_all(count: usize) -> Self {
        Self {
            cards: vec![CardState::Hidden; count],
        }
    }

    /// One reveal per card, all handed out up front with increasing delays.
    pub fn schedule(&self, timings: &Timings) -> Vec<Scheduled> {
        (0..self.cards.len())
            .map(|index| Scheduled::new(entrance_delay_ms(index, timings), Task::RevealCard(index)))
            .collect()
    }

    /// Returns false when the card is unknown or already showing.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(state) if *state == CardState::Hidden => {
                *state = CardState::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, index: usize) -> Option<CardState> {
        self.cards.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == CardState::Visible)
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_step_by_stagger() {
        let timings = Timings::DEFAULT;
        assert_eq!(entrance_delay_ms(0, &timings), 500);
        assert_eq!(entrance_delay_ms(1, &timings), 700);
        assert_eq!(entrance_delay_ms(2, &timings), 900);
        assert_eq!(entrance_delay_ms(10, &timings), 2_500);
    }

    #[test]
    fn delay_saturates_instead_of_overflowing() {
        assert_eq!(entrance_delay_ms(usize::MAX, &Timings::DEFAULT), u32::MAX);
    }

    #[test]
    fn every_card_starts_hidden() {
        let entrance = CardEntrance::hide_all(4);
        assert_eq!(entrance.len(), 4);
        assert!((0..4).all(|i| entrance.state(i) == Some(CardState::Hidden)));
        assert_eq!(entrance.visible().count(), 0);
    }

    #[test]
    fn schedule_covers_each_card_with_increasing_delays() {
        let scheduled = CardEntrance::hide_all(3).schedule(&Timings::DEFAULT);
        assert_eq!(
            scheduled,
            vec![
                Scheduled::new(500, Task::RevealCard(0)),
                Scheduled::new(700, Task::RevealCard(1)),
                Scheduled::new(900, Task::RevealCard(2)),
            ]
        );
        assert!(scheduled.windows(2).all(|w| w[0].delay_ms < w[1].delay_ms));
    }

    #[test]
    fn no_cards_means_no_timers() {
        let entrance = CardEntrance::hide_all(0);
        assert!(entrance.is_empty());
        assert!(entrance.schedule(&Timings::DEFAULT).is_empty());
    }

    #[test]
    fn reveal_is_one_way() {
        let mut entrance = CardEntrance::hide_all(2);
        assert!(entrance.reveal(1));
        assert!(!entrance.reveal(1));
        assert!(!entrance.reveal(7));
        assert_eq!(entrance.visible().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn styles_match_entrance_states() {
        let hidden = CardState::Hidden.style();
        assert_eq!(hidden.opacity, "0");
        assert_eq!(hidden.transform, "translateY(20px)");
        assert_eq!(hidden.transition, "");

        let visible = CardState::Visible.style();
        assert_eq!(visible.opacity, "1");
        assert_eq!(visible.transform, "translateY(0)");
        assert_eq!(visible.transition, "opacity 0.5s ease, transform 0.5s ease");
    }
}
