// UI state - transient messages and the address bar
use std::time::Instant;

pub struct UIState {
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
    /// Text of the address bar while it is being edited
    pub address: String,
    pub address_focused: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            error_message: None,
            info_message: None,
            address: String::new(),
            address_focused: false,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    /// Mirror the current fragment unless the user is typing in the bar.
    pub fn sync_address(&mut self, fragment: &str) {
        if !self.address_focused {
            self.address = format!("#{}", fragment);
        }
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_mirrors_fragment_when_idle() {
        let mut ui = UIState::new();
        ui.sync_address("screen-2");
        assert_eq!(ui.address, "#screen-2");

        ui.address_focused = true;
        ui.address = "#scr".into();
        ui.sync_address("screen-3");
        assert_eq!(ui.address, "#scr");
    }

    #[test]
    fn test_messages_expire() {
        let mut ui = UIState::new();
        ui.set_error("boom".into());
        ui.set_info("ok".into());
        ui.clear_expired_messages(60);
        assert!(ui.error_message.is_some());
        ui.clear_expired_messages(0);
        assert!(ui.error_message.is_none());
        assert!(ui.info_message.is_none());
    }
}
