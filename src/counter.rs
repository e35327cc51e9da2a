use std::rc::Rc;

use yew::Reducible;

/// Click counter owned by the landing view. Starts at 0, only ever goes up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
}

impl Reducible for Counter {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CounterAction::Increment => Rc::new(Self {
                value: self.value.saturating_add(1),
            }),
        }
    }
}

/// Button text: the fixed label with the value inline.
pub fn button_text(label: &str, value: u64) -> String {
    format!("{label}{value}")
}
