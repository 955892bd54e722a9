//! Page initializer: owns the notify button and the card entrance and decides
//! what runs when. Timers are handed back as [`Scheduled`] tasks so the caller
//! picks the clock, real (`enhance`) or simulated ([`Simulation`]).

use log::debug;

use crate::button::NotifyButton;
use crate::cards::CardEntrance;
use crate::config::Timings;
use crate::schedule::{Scheduled, Task, TimerQueue};

#[derive(Debug)]
pub struct Page {
    timings: Timings,
    button: NotifyButton,
    cards: CardEntrance,
}

impl Page {
    /// Hides every card and returns the reveal timers to start right away.
    pub fn initialize(card_count: usize, timings: Timings) -> (Self, Vec<Scheduled>) {
        let cards = CardEntrance::hide_all(card_count);
        let reveals = cards.schedule(&timings);
        debug!("Page initialized with {} feature cards", card_count);

        let page = Self {
            timings,
            button: NotifyButton::new(),
            cards,
        };
        (page, reveals)
    }

    pub fn click(&mut self, current_label: &str) -> Option<Scheduled> {
        let scheduled = self.button.click(current_label, &self.timings);
        if scheduled.is_none() {
            debug!("Notify button clicked mid-cycle, ignoring");
        }
        scheduled
    }

    pub fn run(&mut self, task: Task) {
        match task {
            Task::RestoreButton => self.button.restore(),
            Task::RevealCard(index) => {
                if !self.cards.reveal(index) {
                    debug!("Card {} was already visible or is unknown", index);
                }
            }
        }
    }

    pub fn button(&self) -> &NotifyButton {
        &self.button
    }

    pub fn cards(&self) -> &CardEntrance {
        &self.cards
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }
}

/// A [`Page`] running on a [`TimerQueue`], for stepping through the page in
/// simulated milliseconds.
#[derive(Debug)]
pub struct Simulation {
    page: Page,
    queue: TimerQueue<Task>,
    initial_label: String,
}

impl Simulation {
    pub fn start(card_count: usize, initial_label: &str, timings: Timings) -> Self {
        let (page, reveals) = Page::initialize(card_count, timings);
        let mut queue = TimerQueue::new();
        for Scheduled { delay_ms, task } in reveals {
            queue.schedule(delay_ms, task);
        }
        Self {
            page,
            queue,
            initial_label: initial_label.to_string(),
        }
    }

    /// Runs every task due up to `until`, in firing order.
    pub fn advance_to(&mut self, until: u64) {
        while let Some(fired) = self.queue.pop_due(until) {
            self.page.run(fired.task);
        }
    }

    /// Advances to `at` and clicks the button there. Returns whether the click
    /// started a new confirmation cycle.
    pub fn click_at(&mut self, at: u64) -> bool {
        self.advance_to(at);
        let current = self.label().to_string();
        match self.page.click(&current) {
            Some(Scheduled { delay_ms, task }) => {
                self.queue.schedule(delay_ms, task);
                true
            }
            None => false,
        }
    }

    /// Cancels whatever has not fired yet. Returns how many timers were dropped.
    pub fn teardown(&mut self) -> usize {
        self.queue.cancel_all()
    }

    pub fn now(&self) -> u64 {
        self.queue.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.queue.len()
    }

    pub fn label(&self) -> &str {
        self.page.button().label().unwrap_or(self.initial_label.as_str())
    }

    pub fn button(&self) -> &NotifyButton {
        self.page.button()
    }

    pub fn visible_cards(&self) -> Vec<usize> {
        self.page.cards().visible().collect()
    }
}
