use rand::Rng;

pub const QUOTES: [&str; 5] = [
    "Small steps every day lead to big results 🚀",
    "Consistency is the key to success 🔑",
    "You're making progress, keep going! 💪",
    "Every minute counts ⏱️",
    "The expert in anything was once a beginner 🎯",
];

pub fn pick_quote<'a, R: Rng + ?Sized>(rng: &mut R, quotes: &'a [&'a str]) -> Option<&'a str> {
    if quotes.is_empty() {
        return None;
    }
    Some(quotes[rng.gen_range(0..quotes.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picks_a_member_of_the_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let quote = pick_quote(&mut rng, &QUOTES).unwrap();
            assert!(QUOTES.contains(&quote));
        }
    }

    #[test]
    fn empty_list_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_quote(&mut rng, &[]), None);
    }

    #[test]
    fn same_seed_same_quote() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        assert_eq!(
            pick_quote(&mut first, &QUOTES),
            pick_quote(&mut second, &QUOTES)
        );
    }
}
