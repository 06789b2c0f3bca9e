/// Returns a fresh uuid-v4 string, used for message ids.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
