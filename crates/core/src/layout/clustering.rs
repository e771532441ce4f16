//! Tolerance-based clustering of coordinates.

use ordered_float::OrderedFloat;

/// Cluster a list of f64 values based on tolerance.
///
/// Values are sorted first; a value joins the current cluster when it is
/// within `tolerance` of the previous value. Equal values always share a
/// cluster. Clusters come back in ascending order.
pub fn cluster_list(mut xs: Vec<f64>, tolerance: f64) -> Vec<Vec<f64>> {
    xs.sort_by_key(|x| OrderedFloat(*x));
    let mut groups: Vec<Vec<f64>> = Vec::new();
    let mut current: Vec<f64> = Vec::new();
    let mut last: Option<f64> = None;
    for x in xs {
        match last {
            Some(prev) if x <= prev + tolerance => current.push(x),
            Some(_) => {
                groups.push(std::mem::take(&mut current));
                current.push(x);
            }
            None => current.push(x),
        }
        last = Some(x);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Pick the most populated cluster; ties go to the leftmost one.
pub fn densest_cluster(clusters: Vec<Vec<f64>>) -> Option<Vec<f64>> {
    let mut best: Option<Vec<f64>> = None;
    for cluster in clusters {
        if best.as_ref().is_none_or(|b| cluster.len() > b.len()) {
            best = Some(cluster);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clusters_within_tolerance() {
        let groups = cluster_list(vec![100.0, 0.0, 101.5, 40.0, 99.0], 3.0);
        assert_eq!(groups, vec![vec![0.0], vec![40.0], vec![99.0, 100.0, 101.5]]);
    }

    #[test]
    fn zero_tolerance_still_merges_equal_values() {
        let groups = cluster_list(vec![5.0, 5.0, 6.0], 0.0);
        assert_eq!(groups, vec![vec![5.0, 5.0], vec![6.0]]);
    }

    #[test]
    fn empty_input_has_no_clusters() {
        assert!(cluster_list(Vec::new(), 3.0).is_empty());
        assert!(densest_cluster(Vec::new()).is_none());
    }

    #[test]
    fn densest_prefers_leftmost_on_tie() {
        let best = densest_cluster(vec![vec![10.0, 11.0], vec![50.0, 50.0]]);
        assert_eq!(best, Some(vec![10.0, 11.0]));
        let best = densest_cluster(vec![vec![10.0], vec![50.0, 51.0]]);
        assert_eq!(best, Some(vec![50.0, 51.0]));
    }
}
