use crate::errors::PathPlannerError;
use super::ScoreTable;

/// Construct the path from the origin to the goal node
/// Walks the parent links of the score table backwards from the goal, then reverses
/// scores: ScoreTable<N> - every discovered node with its parent index
/// origin_index: usize - index of the origin in the table
/// goal_index: usize - index of the goal node in the table
pub(crate) fn shortest_path<N>(scores: &ScoreTable<N>, origin_index: usize, goal_index: usize) -> Result<Vec<N>, PathPlannerError>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to origin
    loop {
        let Some((node, score)) = scores.get_index(current_index) else {
            return Err(PathPlannerError::BrokenPredecessorChain);
        };
        path.push(node.clone());

        if current_index == origin_index {
            break;
        }

        // a chain longer than the table has to be a cycle
        if path.len() > scores.len() {
            return Err(PathPlannerError::BrokenPredecessorChain);
        }

        match score.predecessor() {
            Some(parent) => current_index = parent,
            None => return Err(PathPlannerError::BrokenPredecessorChain),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::{NO_PARENT, Score};

    fn score(g: f64, parent: usize) -> Score {
        Score { g, h: 0.0, parent }
    }

    #[test]
    fn test_path_reconstruction() {
        // Create a score table manually to test path building
        let mut scores: ScoreTable<String> = ScoreTable::default();

        let a_index = scores.insert_full("A".to_string(), score(0.0, NO_PARENT)).0;
        let b_index = scores.insert_full("B".to_string(), score(1.0, a_index)).0;
        let c_index = scores.insert_full("C".to_string(), score(3.0, a_index)).0;
        let d_index = scores.insert_full("D".to_string(), score(4.0, c_index)).0;

        // Test path from A to D: A -> C -> D
        let path_to_d = shortest_path(&scores, a_index, d_index).unwrap();
        assert_eq!(path_to_d, vec!["A", "C", "D"].into_iter().map(String::from).collect::<Vec<_>>());

        // Test path from A to B: A -> B
        let path_to_b = shortest_path(&scores, a_index, b_index).unwrap();
        assert_eq!(path_to_b, vec!["A", "B"].into_iter().map(String::from).collect::<Vec<_>>());

        // Origin to itself
        let path_to_a = shortest_path(&scores, a_index, a_index).unwrap();
        assert_eq!(path_to_a, vec!["A".to_string()]);
    }

    #[test]
    fn test_chain_not_reaching_origin() {
        let mut scores: ScoreTable<&str> = ScoreTable::default();
        let a = scores.insert_full("A", score(0.0, NO_PARENT)).0;
        let b = scores.insert_full("B", score(1.0, NO_PARENT)).0;
        let c = scores.insert_full("C", score(2.0, b)).0;

        assert_eq!(shortest_path(&scores, a, c), Err(PathPlannerError::BrokenPredecessorChain));
        assert_eq!(shortest_path(&scores, a, 17), Err(PathPlannerError::BrokenPredecessorChain));
    }

    #[test]
    fn test_cyclic_chain() {
        let mut scores: ScoreTable<&str> = ScoreTable::default();
        let a = scores.insert_full("A", score(0.0, NO_PARENT)).0;
        scores.insert_full("B", score(1.0, 2));
        scores.insert_full("C", score(2.0, 1));

        assert_eq!(shortest_path(&scores, a, 2), Err(PathPlannerError::BrokenPredecessorChain));
    }
}
