pub mod modal;
pub mod scroll_lock;

#[cfg(test)]
pub(crate) mod testing;
