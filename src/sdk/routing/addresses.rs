use std::collections::BTreeMap;
use std::fs;
use std::io::Result as IoResult;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sdk::mtjson::LocationDescription;

/// Persisted list of named locations. Entries are kept sorted by name so the
/// saved file and iteration order are stable.
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct AddressBook {
    addresses: BTreeMap<String, LocationDescription>,
}

impl AddressBook {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        if path.as_ref().exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)
    }

    /// Adds or replaces a named address, returning the previous entry.
    pub fn insert(
        &mut self,
        name: &str,
        location: LocationDescription,
    ) -> Option<LocationDescription> {
        self.addresses.insert(name.to_string(), location)
    }

    pub fn remove(&mut self, name: &str) -> Option<LocationDescription> {
        self.addresses.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&LocationDescription> {
        self.addresses.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocationDescription)> {
        self.addresses
            .iter()
            .map(|(name, location)| (name.as_str(), location))
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
