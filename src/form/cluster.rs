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

use crate::types::v1::cluster::{ClusterTarget, SimpleCluster};

/// Returns a copy of `clusters` where `zone` of the targeted cluster is (un)checked.
pub fn toggle_cluster_zone(
    clusters: &[SimpleCluster],
    zone: &str,
    checked: bool,
    target: &ClusterTarget,
) -> Vec<SimpleCluster> {
    let mut clusters = clusters.to_vec();
    for cluster in clusters.iter_mut().filter(|c| target.matches(c)) {
        for item in cluster.topology.iter_mut().filter(|z| z.zone == zone) {
            item.checked = checked;
        }
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_clusters;

    #[test]
    fn test_toggle_by_id() {
        let clusters = test_clusters();
        let target = ClusterTarget {
            id: Some(1),
            name: None,
        };

        let toggled = toggle_cluster_zone(&clusters, "zone1", true, &target);

        assert!(toggled[0].topology[0].checked);
        assert!(!toggled[0].topology[1].checked);
        // other cluster has a zone1 too and stays untouched
        assert!(!toggled[1].topology[0].checked);
        // input is a separate copy
        assert!(!clusters[0].topology[0].checked);
    }

    #[test]
    fn test_toggle_by_name() {
        let clusters = test_clusters();
        let target = ClusterTarget {
            id: None,
            name: Some("c2".to_string()),
        };

        let toggled = toggle_cluster_zone(&clusters, "zone1", true, &target);
        assert!(!toggled[0].topology[0].checked);
        assert!(toggled[1].topology[0].checked);

        let untoggled = toggle_cluster_zone(&toggled, "zone1", false, &target);
        assert_eq!(untoggled, clusters);
    }

    #[test]
    fn test_no_target_matches() {
        let clusters = test_clusters();
        let toggled = toggle_cluster_zone(&clusters, "zone1", true, &ClusterTarget::default());
        assert_eq!(toggled, clusters);
    }
}
