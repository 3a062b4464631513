/// One story pulled from the feed.
///
/// Built once by the feed layer, then owned read-only by exactly one
/// processing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub title: String,
    pub link: String,
}
