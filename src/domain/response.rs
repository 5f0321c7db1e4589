/// Answer to a yes/no prompt.
///
/// Kept distinct from `bool` so further answers (such as quitting) can be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Yes,
    No,
}

impl Response {
    pub fn is_yes(self) -> bool {
        self == Response::Yes
    }
}
