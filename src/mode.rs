//! Statistical mode of a sequence.

/// Returns the most frequent elements of `items` together with their frequency.
///
/// Every element that reaches the highest count is returned once, in the order it first
/// appears. When all elements are distinct they are all modes with frequency 1. An empty
/// slice yields no modes and a frequency of 0.
///
/// Each position is counted against the whole slice, so this runs in O(n²) and only needs
/// `PartialEq`.
///
/// ```rust
/// use chaining_hashmap::find_mode;
///
/// let (modes, frequency) = find_mode(&["apple", "apple", "grape", "melon", "peach"]);
/// assert_eq!(modes, vec!["apple"]);
/// assert_eq!(frequency, 2);
/// ```
#[must_use]
pub fn find_mode<T: PartialEq + Clone>(items: &[T]) -> (Vec<T>, usize) {
    let mut modes: Vec<T> = Vec::new();
    let mut max_frequency = 0;

    for item in items {
        let frequency = items.iter().filter(|&other| other == item).count();
        if frequency > max_frequency {
            max_frequency = frequency;
            modes.clear();
            modes.push(item.clone());
        } else if frequency == max_frequency && !modes.contains(item) {
            modes.push(item.clone());
        }
    }

    (modes, max_frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode() {
        let (modes, frequency) = find_mode(&["apple", "apple", "grape", "melon", "peach"]);
        assert_eq!(modes, vec!["apple"]);
        assert_eq!(frequency, 2);
    }

    #[test]
    fn test_tied_modes_keep_first_seen_order() {
        let input = ["Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu"];
        let (modes, frequency) = find_mode(&input);
        assert_eq!(modes, vec!["Mint", "Ubuntu"]);
        assert_eq!(frequency, 3);

        let input = ["2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2"];
        let (modes, frequency) = find_mode(&input);
        assert_eq!(modes, vec!["2", "4", "3"]);
        assert_eq!(frequency, 3);
    }

    #[test]
    fn test_all_distinct() {
        let input = ["one", "two", "three", "four", "five"];
        let (modes, frequency) = find_mode(&input);
        assert_eq!(modes, input.to_vec());
        assert_eq!(frequency, 1);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(find_mode(&[42]), (vec![42], 1));
    }

    #[test]
    fn test_empty() {
        let empty: [String; 0] = [];
        assert_eq!(find_mode(&empty), (Vec::<String>::new(), 0));
    }

    #[test]
    fn test_later_higher_frequency_resets_modes() {
        let (modes, frequency) = find_mode(&[1, 2, 3, 3]);
        assert_eq!(modes, vec![3]);
        assert_eq!(frequency, 2);
    }
}
