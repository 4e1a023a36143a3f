//! The card-matching state machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::progress::WinDetector;
use super::scheduler::{Continuation, Generation, Resolution, TimerQueue};
use super::state::{GameState, Phase};
use crate::cards::{CardIndex, Deck};
use crate::core::config::duration_ms;
use crate::core::{ConfigError, GameConfig, GameRng};
use crate::events::{EngineEvent, EventBus, EventListener, ListenerId};

/// Why a reveal was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card at that position.
    OutOfRange,
    /// Card already matched.
    Matched,
    /// Card already face up this round.
    AlreadyRevealed,
    /// A pair is waiting to resolve.
    Resolving,
    /// The game is over.
    Won,
}

/// What a call to [`MatchEngine::reveal`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair is face up.
    FirstCard,
    /// Second card is face up; the pair will resolve after the settle delay.
    SecondCard(Resolution),
}

impl RevealOutcome {
    /// Did the reveal change the state?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, RevealOutcome::Ignored(_))
    }
}

/// Owns one game session: the deal, per-card visibility, pending
/// resolutions and event listeners.
///
/// Every operation is infallible. Clicks that don't apply are ignored and
/// reported through [`RevealOutcome`] for callers that care.
#[derive(Debug)]
pub struct MatchEngine {
    config: GameConfig,
    rng: GameRng,
    state: GameState,
    generation: Generation,
    timers: TimerQueue,
    /// The one continuation allowed to resolve the current pair.
    in_flight: Option<Continuation>,
    win: WinDetector,
    events: EventBus,
}

impl MatchEngine {
    /// Start a session with a freshly shuffled deal.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let deck = Deck::deal(&config.symbols, &mut rng);
        Ok(Self::assemble(config, rng, deck))
    }

    /// Start a session on a fixed layout.
    ///
    /// The layout's faces replace `config.symbols`; later new games shuffle
    /// those same faces.
    pub fn with_deck(mut config: GameConfig, deck: Deck) -> Result<Self, ConfigError> {
        // Revalidate: a Deck may have been deserialized without checks.
        let deck = Deck::from_symbols(deck.iter().cloned())?;
        config.symbols = deck.distinct_symbols();
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self::assemble(config, rng, deck))
    }

    fn assemble(config: GameConfig, rng: GameRng, deck: Deck) -> Self {
        tracing::debug!(cards = deck.len(), seed = rng.seed(), "match engine created");
        Self {
            config,
            rng,
            state: GameState::new(deck),
            generation: Generation::default(),
            timers: TimerQueue::new(),
            in_flight: None,
            win: WinDetector::new(),
            events: EventBus::new(),
        }
    }

    // === Queries ===

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Borrow the live state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read-only copy of the state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Current generation. Bumped by every new game.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Virtual time of the engine clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Resolutions waiting for their settle delay.
    pub fn pending(&self) -> impl Iterator<Item = &Continuation> {
        self.timers.iter()
    }

    // === Listeners ===

    /// Subscribe a listener to engine events.
    pub fn subscribe(&mut self, listener: impl EventListener + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    /// Subscribe a closure to engine events.
    pub fn subscribe_fn<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(&EngineEvent) + Send + 'static,
    {
        self.events.subscribe_fn(f)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    // === Intents ===

    /// Flip a card face up.
    ///
    /// Ignored when the game is won, a pair is resolving, the index is off
    /// the table, or the card is already face up. Revealing the second card
    /// schedules the pair's resolution.
    pub fn reveal(&mut self, index: CardIndex) -> RevealOutcome {
        if let Some(reason) = self.ignore_reason(index) {
            tracing::trace!(%index, ?reason, "reveal ignored");
            return RevealOutcome::Ignored(reason);
        }

        self.state.push_revealed(index);
        tracing::debug!(%index, generation = self.generation.0, "card revealed");
        self.events.emit(&EngineEvent::Revealed(index));

        let [first, second] = match self.state.revealed() {
            [first, second] => [*first, *second],
            _ => return RevealOutcome::FirstCard,
        };

        let resolution = if self.state.symbol(first) == self.state.symbol(second) {
            Resolution::Match
        } else {
            Resolution::Mismatch
        };
        let delay = match resolution {
            Resolution::Match => self.config.match_delay(),
            Resolution::Mismatch => self.config.mismatch_delay(),
        };

        let continuation = self
            .timers
            .schedule(delay, self.generation, [first, second], resolution);
        self.in_flight = Some(continuation);
        tracing::debug!(
            %first,
            %second,
            ?resolution,
            ticket = continuation.ticket,
            delay_ms = duration_ms(delay),
            "pair scheduled"
        );

        RevealOutcome::SecondCard(resolution)
    }

    /// Throw away the current deal and start over.
    ///
    /// Cancels any pending resolution, reshuffles, resets counters. Anything
    /// scheduled before this call is stale from now on.
    pub fn new_game(&mut self) {
        self.generation = self.generation.next();
        let cancelled = self.timers.cancel_all();
        self.in_flight = None;

        let deck = Deck::deal(&self.config.symbols, &mut self.rng);
        self.state = GameState::new(deck);
        self.win = WinDetector::new();

        tracing::debug!(generation = self.generation.0, cancelled, "new game");
    }

    // === Time ===

    /// Advance the engine clock, resolving every pair whose delay elapsed.
    ///
    /// Returns the number of pairs resolved.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let due = self.timers.advance(elapsed);
        let resolved = due.into_iter().filter(|c| self.apply(*c)).count();
        tracing::trace!(resolved, waiting = self.timers.len(), "clock advanced");
        resolved
    }

    /// Resolve everything pending right now, ignoring delays.
    pub fn settle(&mut self) -> usize {
        let due = self.timers.drain();
        due.into_iter().filter(|c| self.apply(*c)).count()
    }

    /// Deliver a continuation from an external timer.
    ///
    /// Returns false, changing nothing, if the continuation is stale: from
    /// an earlier generation or no longer the one in flight.
    pub fn resume(&mut self, continuation: Continuation) -> bool {
        if !self.is_current(&continuation) {
            return self.discard(&continuation);
        }
        self.timers.remove(continuation.ticket);
        self.apply(continuation)
    }

    // === Internals ===

    fn ignore_reason(&self, index: CardIndex) -> Option<IgnoreReason> {
        if self.state.is_won() {
            Some(IgnoreReason::Won)
        } else if self.state.phase() == Phase::Resolving {
            Some(IgnoreReason::Resolving)
        } else if !self.state.contains(index) {
            Some(IgnoreReason::OutOfRange)
        } else if self.state.matched().contains(&index) {
            Some(IgnoreReason::Matched)
        } else if self.state.revealed().contains(&index) {
            Some(IgnoreReason::AlreadyRevealed)
        } else {
            None
        }
    }

    fn is_current(&self, continuation: &Continuation) -> bool {
        continuation.generation == self.generation && self.in_flight == Some(*continuation)
    }

    fn discard(&self, continuation: &Continuation) -> bool {
        tracing::debug!(
            ticket = continuation.ticket,
            scheduled_in = continuation.generation.0,
            current = self.generation.0,
            "discarding stale continuation"
        );
        false
    }

    fn apply(&mut self, continuation: Continuation) -> bool {
        if !self.is_current(&continuation) {
            return self.discard(&continuation);
        }
        self.in_flight = None;

        let [first, second] = continuation.pair;
        match continuation.resolution {
            Resolution::Match => {
                self.state.commit_match(first, second);
                tracing::debug!(%first, %second, moves = self.state.move_count(), "pair matched");
                self.events.emit(&EngineEvent::Matched(continuation.pair));

                if self.win.observe(&self.state) {
                    self.state.mark_won();
                    tracing::info!(
                        moves = self.state.move_count(),
                        generation = self.generation.0,
                        "game won"
                    );
                    self.events.emit(&EngineEvent::Won);
                }
            }
            Resolution::Mismatch => {
                self.state.revert_mismatch(first, second);
                tracing::debug!(%first, %second, moves = self.state.move_count(), "pair flipped back");
                self.events.emit(&EngineEvent::MismatchResolved(continuation.pair));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::cards::CardState;

    fn engine() -> MatchEngine {
        let deck = Deck::from_symbols(["🐶", "🐱", "🐶", "🐱"]).unwrap();
        MatchEngine::with_deck(GameConfig::new().with_seed(42), deck).unwrap()
    }

    fn settle_delay() -> Duration {
        GameConfig::default().mismatch_delay()
    }

    #[test]
    fn test_new_engine_deals_configured_symbols() {
        let engine = MatchEngine::new(GameConfig::new().with_seed(1)).unwrap();

        assert_eq!(engine.state().card_count(), 12);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.generation(), Generation(0));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig::new().with_symbols(["a", "a"]);
        assert!(matches!(MatchEngine::new(config), Err(ConfigError::DuplicateSymbol(_))));
    }

    #[test]
    fn test_with_deck_replaces_symbols() {
        let engine = engine();
        let faces: Vec<_> = engine.config().symbols.iter().map(|s| s.as_str()).collect();
        assert_eq!(faces, vec!["🐶", "🐱"]);
    }

    #[test]
    fn test_first_reveal() {
        let mut engine = engine();

        assert_eq!(engine.reveal(CardIndex(0)), RevealOutcome::FirstCard);
        assert_eq!(engine.state().revealed(), &[CardIndex(0)]);
        assert_eq!(engine.state().move_count(), 0);
        assert_eq!(engine.pending().count(), 0);
    }

    #[test]
    fn test_second_reveal_schedules() {
        let mut engine = engine();

        engine.reveal(CardIndex(0));
        assert_eq!(
            engine.reveal(CardIndex(2)),
            RevealOutcome::SecondCard(Resolution::Match)
        );
        assert_eq!(engine.phase(), Phase::Resolving);

        let pending: Vec<_> = engine.pending().copied().collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].pair, [CardIndex(0), CardIndex(2)]);
        assert_eq!(pending[0].due_at, GameConfig::default().match_delay());
    }

    #[test]
    fn test_ignore_reasons() {
        let mut engine = engine();

        assert_eq!(
            engine.reveal(CardIndex(4)),
            RevealOutcome::Ignored(IgnoreReason::OutOfRange)
        );

        engine.reveal(CardIndex(0));
        assert_eq!(
            engine.reveal(CardIndex(0)),
            RevealOutcome::Ignored(IgnoreReason::AlreadyRevealed)
        );

        engine.reveal(CardIndex(2));
        assert_eq!(
            engine.reveal(CardIndex(1)),
            RevealOutcome::Ignored(IgnoreReason::Resolving)
        );

        engine.settle();
        assert_eq!(
            engine.reveal(CardIndex(2)),
            RevealOutcome::Ignored(IgnoreReason::Matched)
        );
    }

    #[test]
    fn test_resolution_waits_for_delay() {
        let mut engine = engine();
        engine.reveal(CardIndex(0));
        engine.reveal(CardIndex(1));

        assert_eq!(engine.advance(settle_delay() - Duration::from_millis(1)), 0);
        assert_eq!(engine.state().revealed().len(), 2);

        assert_eq!(engine.advance(Duration::from_millis(1)), 1);
        assert!(engine.state().revealed().is_empty());
        assert_eq!(engine.state().move_count(), 1);
        assert_eq!(engine.state().card_state(CardIndex(0)), CardState::Hidden);
    }

    #[test]
    fn test_resume_external_timer() {
        let mut engine = engine();
        engine.reveal(CardIndex(0));
        engine.reveal(CardIndex(2));
        let continuation = *engine.pending().next().unwrap();

        assert!(engine.resume(continuation));
        assert_eq!(engine.pending().count(), 0);
        assert_eq!(engine.state().matched().len(), 2);

        // Delivering it twice does nothing.
        assert!(!engine.resume(continuation));
        assert_eq!(engine.state().move_count(), 1);
    }

    #[test]
    fn test_repeat_pair_uses_new_ticket() {
        let mut engine = engine();
        engine.reveal(CardIndex(0));
        engine.reveal(CardIndex(1));
        let old = *engine.pending().next().unwrap();
        engine.settle();

        engine.reveal(CardIndex(0));
        engine.reveal(CardIndex(1));

        assert!(!engine.resume(old));
        assert_eq!(engine.state().revealed().len(), 2);
    }

    #[test]
    fn test_new_game_resets() {
        let mut engine = engine();
        engine.reveal(CardIndex(0));
        engine.reveal(CardIndex(2));
        engine.settle();

        engine.new_game();

        assert_eq!(engine.generation(), Generation(1));
        assert!(engine.state().matched().is_empty());
        assert_eq!(engine.state().move_count(), 0);
        assert_eq!(engine.state().card_count(), 4);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_events_in_order() {
        let mut engine = engine();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        engine.subscribe_fn(move |e| sink.lock().unwrap().push(*e));

        engine.reveal(CardIndex(0));
        engine.reveal(CardIndex(1));
        engine.settle();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                EngineEvent::Revealed(CardIndex(0)),
                EngineEvent::Revealed(CardIndex(1)),
                EngineEvent::MismatchResolved([CardIndex(0), CardIndex(1)]),
            ]
        );
    }
}
