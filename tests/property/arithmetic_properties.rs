use proptest::prelude::*;
use user_fixture::{add, Stringer, User};

proptest! {
    #[test]
    fn test_add_is_commutative(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn test_zero_is_identity(a in any::<i64>()) {
        prop_assert_eq!(add(a, 0), a);
        prop_assert_eq!(add(0, a), a);
    }

    #[test]
    fn test_add_matches_wrapping_sum(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(add(a, b), a.wrapping_add(b));
    }

    #[test]
    fn test_represent_is_name(name in any::<String>(), age in any::<i64>()) {
        // Construction never fails, and age never leaks into the text.
        let user = User::new(name.clone(), age);
        prop_assert_eq!(user.represent(), name);
    }
}
