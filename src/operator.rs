/// Instruction kinds understood by the virtual machine.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum OperatorKind {
    /// Beginning of the program, boundary for backward scans
    Start,
    /// Stops the program
    End,

    Right,
    Left,
    Increment,
    Decrement,
    Output,
    Input,
    While,
    WhileEnd,

    /// Run the nearest previous operator once more
    Repeat,
    /// Joke operator of Blub
    GiveFishfood,
    /// Joke operator of Ook
    GiveBanana,
}

impl OperatorKind {
    /// The eight original operators in their conventional order. Coded
    /// dialects select from this table by index.
    pub const BASIC: [OperatorKind; 8] = [
        OperatorKind::Right,
        OperatorKind::Left,
        OperatorKind::Increment,
        OperatorKind::Decrement,
        OperatorKind::Output,
        OperatorKind::Input,
        OperatorKind::While,
        OperatorKind::WhileEnd,
    ];

    /// Fixed message printed by decorative operators, `None` for the rest.
    pub fn decoration(self) -> Option<&'static str> {
        match self {
            OperatorKind::GiveFishfood => Some("*Fishfood transfer takes place* - \"Blub!\""),
            OperatorKind::GiveBanana => Some("*Banana transfer takes place* - \"Ook!\""),
            _ => None,
        }
    }
}
