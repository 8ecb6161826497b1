//! Transfer settings: destination choice and organization rules
//!
//! The destinations are inert labels in this build - nothing is uploaded.
//! Settings live in memory only and reset to defaults on every launch.

/// Where processed files would be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Local,
    Dropbox,
    OneDrive,
    S3,
}

impl Destination {
    /// Display label for the settings panel and summary
    pub fn label(&self) -> &'static str {
        match self {
            Destination::Local => "Local Storage",
            Destination::Dropbox => "Dropbox",
            Destination::OneDrive => "OneDrive",
            Destination::S3 => "Amazon S3",
        }
    }

    /// Glyph shown next to the radio label
    pub fn icon(&self) -> &'static str {
        match self {
            Destination::Local => "💻",
            Destination::Dropbox => "☁️",
            Destination::OneDrive => "☁️",
            Destination::S3 => "🪣",
        }
    }

    /// All destinations in display order
    pub fn all() -> [Destination; 4] {
        [
            Destination::Local,
            Destination::Dropbox,
            Destination::OneDrive,
            Destination::S3,
        ]
    }
}

/// Destination choice plus the three independent organization rule flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSettings {
    pub destination: Destination,
    pub date_folder: bool,
    pub device_folder: bool,
    pub duplicate_check: bool,
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            destination: Destination::Local,
            date_folder: true,
            device_folder: false,
            duplicate_check: true,
        }
    }
}

impl TransferSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_destination(&mut self, destination: Destination) {
        self.destination = destination;
    }

    pub fn set_date_folder(&mut self, enabled: bool) {
        self.date_folder = enabled;
    }

    pub fn set_device_folder(&mut self, enabled: bool) {
        self.device_folder = enabled;
    }

    pub fn set_duplicate_check(&mut self, enabled: bool) {
        self.duplicate_check = enabled;
    }

    /// Human-readable summary shown below the settings groups
    ///
    /// Always names the destination; lists the active rules in fixed order
    /// (date, device, duplicate) when at least one is enabled.
    pub fn summary(&self) -> String {
        let mut rules = Vec::new();
        if self.date_folder {
            rules.push("date folder");
        }
        if self.device_folder {
            rules.push("device folder");
        }
        if self.duplicate_check {
            rules.push("duplicate check");
        }

        let mut summary = format!("destination: {}", self.destination.label());
        if !rules.is_empty() {
            summary.push_str("\napplied rules: ");
            summary.push_str(&rules.join(", "));
        }
        summary
    }
}
