#[derive(Debug, Clone, PartialEq)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub max_attendees: u32,
    pub tags: Vec<String>,
    pub entry_fee: f64,
}
