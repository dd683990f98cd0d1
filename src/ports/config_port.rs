//! Configuration access port trait.

pub trait ConfigPort {
    /// All section names, in no particular order.
    fn sections(&self) -> Vec<String>;
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64;
}
