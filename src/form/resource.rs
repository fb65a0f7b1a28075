// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::error::{EmptyZoneSetSnafu, Error};
use crate::types::v1::resource::{EssentialParameters, MaxResource, ServerResource};

/// The scarcest selected zone bounds every dimension of a tenant unit.
///
/// Fails with `EmptyZoneSet` when no server lives in `zones`.
pub fn min_available_resources<S>(
    zones: &[S],
    essentials: &EssentialParameters,
) -> Result<MaxResource, Error>
where
    S: AsRef<str>,
{
    let selected: Vec<&ServerResource> = essentials
        .server_resources
        .iter()
        .filter(|resource| zones.iter().any(|z| z.as_ref() == resource.ob_zone))
        .collect();

    let Some((first, rest)) = selected.split_first() else {
        return EmptyZoneSetSnafu {
            zones: zones.iter().map(|z| z.as_ref().to_string()).collect::<Vec<_>>(),
        }
        .fail();
    };

    Ok(rest.iter().fold(
        MaxResource {
            max_cpu: first.available_cpu,
            max_log_disk: first.available_log_disk,
            max_memory: first.available_memory,
        },
        |acc, resource| MaxResource {
            max_cpu: acc.max_cpu.min(resource.available_cpu),
            max_log_disk: acc.max_log_disk.min(resource.available_log_disk),
            max_memory: acc.max_memory.min(resource.available_memory),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_essentials;

    #[test]
    fn test_tightest_zone_wins() {
        let essentials = test_essentials();
        let max = min_available_resources(&["zone1", "zone2"], &essentials).expect("resources");

        assert_eq!(max.max_cpu, 2.0);
        assert_eq!(max.max_memory, 8 << 30);
        assert_eq!(max.max_log_disk, 20 << 30);
    }

    #[test]
    fn test_dimensions_are_independent() {
        let essentials = test_essentials();
        let max = min_available_resources(&["zone1", "zone3"], &essentials).expect("resources");

        // zone1 is tighter on memory, zone3 on cpu and log disk
        assert_eq!(max.max_cpu, 1.0);
        assert_eq!(max.max_memory, 16 << 30);
        assert_eq!(max.max_log_disk, 10 << 30);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let essentials = test_essentials();
        let before = essentials.clone();
        let _ = min_available_resources(&["zone1", "zone2", "zone3"], &essentials)
            .expect("resources");
        assert_eq!(essentials, before);
    }

    #[test]
    fn test_empty_zone_set() {
        let essentials = test_essentials();
        let zones: [&str; 0] = [];

        let err = min_available_resources(&zones, &essentials).unwrap_err();
        assert!(matches!(err, Error::EmptyZoneSet { .. }));

        let err = min_available_resources(&["zone9"], &essentials).unwrap_err();
        assert!(matches!(err, Error::EmptyZoneSet { ref zones } if zones == &["zone9"]));
    }
}
