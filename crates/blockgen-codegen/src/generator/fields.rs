//! Dropdown values shared by the list and text accessors.

/// A symbolic element position, counted from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Last,
    FromStart,
    FromEnd,
    Random,
}

impl Position {
    pub const CHOICES: &'static [(&'static str, Self)] = &[
        ("FIRST", Self::First),
        ("LAST", Self::Last),
        ("FROM_START", Self::FromStart),
        ("FROM_END", Self::FromEnd),
        ("RANDOM", Self::Random),
    ];

    /// The dropdown value naming this position.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "FIRST",
            Self::Last => "LAST",
            Self::FromStart => "FROM_START",
            Self::FromEnd => "FROM_END",
            Self::Random => "RANDOM",
        }
    }
}

/// What an indexed accessor does with the element it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Get,
    GetRemove,
    Remove,
    Set,
    Insert,
}

impl AccessMode {
    pub const CHOICES: &'static [(&'static str, Self)] = &[
        ("GET", Self::Get),
        ("GET_REMOVE", Self::GetRemove),
        ("REMOVE", Self::Remove),
        ("SET", Self::Set),
        ("INSERT", Self::Insert),
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::GetRemove => "GET_REMOVE",
            Self::Remove => "REMOVE",
            Self::Set => "SET",
            Self::Insert => "INSERT",
        }
    }
}
