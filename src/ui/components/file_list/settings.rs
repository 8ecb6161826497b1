//! Settings mutations for FileList

use crate::core::Destination;
use crate::ui::components::settings_panel::Rule;

use super::FileList;

impl FileList {
    /// Choose the output destination
    pub fn set_destination(&mut self, destination: Destination) {
        self.controller.set_destination(destination);
    }

    /// Flip one of the organization rule flags
    pub fn toggle_rule(&mut self, rule: Rule) {
        match rule {
            Rule::DateFolder => {
                let enabled = !self.controller.settings().date_folder;
                self.controller.set_date_folder(enabled);
            }
            Rule::DeviceFolder => {
                let enabled = !self.controller.settings().device_folder;
                self.controller.set_device_folder(enabled);
            }
            Rule::DuplicateCheck => {
                let enabled = !self.controller.settings().duplicate_check;
                self.controller.set_duplicate_check(enabled);
            }
        }
    }
}
