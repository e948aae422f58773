//! Choice lists offered by the device and application pickers.
//!
//! These stand in for device enumeration and application discovery. The
//! built-in placeholders can be replaced through configuration.

use crate::defaults::{APPLICATIONS, INPUT_DEVICES, OUTPUT_DEVICES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub input_devices: Vec<String>,
    pub output_devices: Vec<String>,
    pub applications: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        Self {
            input_devices: owned(INPUT_DEVICES),
            output_devices: owned(OUTPUT_DEVICES),
            applications: owned(APPLICATIONS),
        }
    }
}

impl Catalog {
    /// Name of the first empty list, if any.
    pub fn first_empty_list(&self) -> Option<&'static str> {
        if self.input_devices.is_empty() {
            Some("input_devices")
        } else if self.output_devices.is_empty() {
            Some("output_devices")
        } else if self.applications.is_empty() {
            Some("applications")
        } else {
            None
        }
    }
}
