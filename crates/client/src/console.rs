use battle_core::BattleEvent;
use battle_runtime::EventSink;

/// Prints battle messages to stdout. Animation events have no text form.
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&self, event: &BattleEvent) {
        if let BattleEvent::Message(text) = event {
            println!("{}", text);
        }
    }
}
