//! User query service - in-memory queries over a roster
//!
//! Every query borrows the caller's users and returns a freshly built
//! container. Nothing here mutates its input or fails; absent results are
//! `None`, an empty container, or the documented `-1.0` average.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::{Privilege, User};

/// A predicate accepted by [`UserQueryService::filter_by`]
pub type UserPredicate<'p> = &'p dyn Fn(&User) -> bool;

/// Average reported for an empty roster
pub const EMPTY_AVERAGE_AGE: f64 = -1.0;

/// Minimum occurrences for a last name to count as "frequent"
pub const MIN_FREQUENT_LAST_NAME_COUNT: usize = 2;

/// Stateless query service over slices of users
#[derive(Debug, Default, Clone, Copy)]
pub struct UserQueryService;

impl UserQueryService {
    pub fn new() -> Self {
        Self
    }

    /// First names sorted in descending lexicographic order
    ///
    /// Names compare by UTF-8 bytes (Unicode scalar order), not UTF-16 units.
    pub fn first_names_reverse_sorted(&self, users: &[User]) -> Vec<String> {
        let mut names: Vec<String> = users.iter().map(|u| u.first_name.clone()).collect();
        names.sort_by(|a, b| b.cmp(a));
        names
    }

    /// Users ordered by age descending, then first name ascending
    ///
    /// The sort is stable, so users equal on both keys keep input order.
    /// First names compare by UTF-8 bytes, as in
    /// [`first_names_reverse_sorted`](Self::first_names_reverse_sorted).
    pub fn sort_by_age_desc_and_name_asc<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        let mut sorted: Vec<&User> = users.iter().collect();
        sorted.sort_by(|a, b| {
            b.age
                .cmp(&a.age)
                .then_with(|| a.first_name.cmp(&b.first_name))
        });
        sorted
    }

    /// Every privilege held by any user, in order of first appearance
    pub fn distinct_privileges(&self, users: &[User]) -> Vec<Privilege> {
        let mut seen = HashSet::new();
        users
            .iter()
            .flat_map(|u| u.privileges.iter().copied())
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Some user strictly older than `age`, if any
    ///
    /// Callers must not rely on which match is returned when several qualify.
    pub fn find_user_older_than<'a>(&self, users: &'a [User], age: u32) -> Option<&'a User> {
        users.iter().find(|u| u.age > age)
    }

    /// Users keyed by how many privileges they hold
    pub fn group_by_privilege_count<'a>(&self, users: &'a [User]) -> BTreeMap<usize, Vec<&'a User>> {
        let mut groups: BTreeMap<usize, Vec<&User>> = BTreeMap::new();
        for user in users {
            groups.entry(user.privileges.len()).or_default().push(user);
        }
        groups
    }

    /// Mean age, or [`EMPTY_AVERAGE_AGE`] for an empty roster
    pub fn average_age(&self, users: &[User]) -> f64 {
        if users.is_empty() {
            return EMPTY_AVERAGE_AGE;
        }
        let total: f64 = users.iter().map(|u| f64::from(u.age)).sum();
        total / users.len() as f64
    }

    /// The most common last name shared by at least two users
    ///
    /// On a tie for the highest count, the name that appears first in
    /// `users` wins.
    pub fn most_frequent_last_name(&self, users: &[User]) -> Option<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();
        for user in users {
            let count = counts.entry(user.last_name.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(user.last_name.as_str());
            }
            *count += 1;
        }

        first_seen
            .into_iter()
            .map(|name| (name, counts[name]))
            .filter(|(_, count)| *count >= MIN_FREQUENT_LAST_NAME_COUNT)
            .fold(None, |best: Option<(&str, usize)>, candidate| match best {
                Some((_, best_count)) if best_count >= candidate.1 => best,
                _ => Some(candidate),
            })
            .map(|(name, _)| name.to_string())
    }

    /// Users satisfying every predicate
    ///
    /// Predicates are evaluated in order and stop at the first rejection.
    /// An empty predicate list accepts every user.
    pub fn filter_by<'a>(&self, users: &'a [User], predicates: &[UserPredicate<'_>]) -> Vec<&'a User> {
        users
            .iter()
            .filter(|&user| predicates.iter().all(|predicate| predicate(user)))
            .collect()
    }

    /// Map every user to text and join the results with `delimiter`
    pub fn join<F>(&self, users: &[User], delimiter: &str, map: F) -> String
    where
        F: FnMut(&User) -> String,
    {
        users.iter().map(map).collect::<Vec<_>>().join(delimiter)
    }

    /// Users keyed by each privilege they hold
    ///
    /// A user appears once in the group of every privilege in its list.
    pub fn group_by_privilege<'a>(&self, users: &'a [User]) -> BTreeMap<Privilege, Vec<&'a User>> {
        let mut groups: BTreeMap<Privilege, Vec<&User>> = BTreeMap::new();
        for user in users {
            for privilege in &user.privileges {
                groups.entry(*privilege).or_default().push(user);
            }
        }
        groups
    }

    /// Number of users per last name
    pub fn count_by_last_name(&self, users: &[User]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for user in users {
            *counts.entry(user.last_name.clone()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Privilege::*;

    fn user(first: &str, last: &str, age: u32) -> User {
        User::new(first, last, age)
    }

    fn roster() -> Vec<User> {
        vec![
            user("John", "Smith", 42).with_privileges([Create, Read, Update, Delete]),
            user("Anna", "Smith", 35).with_privileges([Read, Update]),
            user("Peter", "Johnson", 28).with_privileges([Read]),
            user("Maria", "Garcia", 35).with_privileges([Read, Create]),
            user("Liam", "Brown", 19),
        ]
    }

    fn first_names(users: &[&User]) -> Vec<String> {
        users.iter().map(|u| u.first_name.clone()).collect()
    }

    #[test]
    fn test_first_names_reverse_sorted() {
        let service = UserQueryService::new();
        let mut users = roster();
        users.push(user("Anna", "Lee", 20));

        let names = service.first_names_reverse_sorted(&users);
        assert_eq!(names, vec!["Peter", "Maria", "Liam", "John", "Anna", "Anna"]);

        let mut ascending = names.clone();
        ascending.sort();
        ascending.reverse();
        assert_eq!(ascending, names);
    }

    #[test]
    fn test_first_names_compare_by_scalar_value() {
        let service = UserQueryService::new();
        let users = vec![user("\u{FF21}", "X", 1), user("\u{1F600}", "X", 1)];

        assert_eq!(
            service.first_names_reverse_sorted(&users),
            vec!["\u{1F600}", "\u{FF21}"]
        );
    }

    #[test]
    fn test_sort_by_age_desc_and_name_asc() {
        let service = UserQueryService::new();
        let users = roster();

        let sorted = service.sort_by_age_desc_and_name_asc(&users);
        assert_eq!(first_names(&sorted), vec!["John", "Anna", "Maria", "Peter", "Liam"]);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let service = UserQueryService::new();
        let users = vec![
            user("Sam", "First", 30),
            user("Sam", "Second", 30),
            user("Abe", "Third", 30),
        ];

        let sorted = service.sort_by_age_desc_and_name_asc(&users);
        let last_names: Vec<&str> = sorted.iter().map(|u| u.last_name.as_str()).collect();
        assert_eq!(last_names, vec!["Third", "First", "Second"]);

        let owned: Vec<User> = sorted.into_iter().cloned().collect();
        let resorted: Vec<User> = service
            .sort_by_age_desc_and_name_asc(&owned)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(resorted, owned);
    }

    #[test]
    fn test_distinct_privileges_first_occurrence_order() {
        let service = UserQueryService::new();
        let users = vec![
            user("A", "X", 1).with_privileges([Update, Read]),
            user("B", "X", 1).with_privileges([Read, Delete, Update]),
        ];

        let privileges = service.distinct_privileges(&users);
        assert_eq!(privileges, vec![Update, Read, Delete]);

        let unique: HashSet<_> = privileges.iter().collect();
        assert_eq!(unique.len(), privileges.len());
    }

    #[test]
    fn test_distinct_privileges_empty() {
        let service = UserQueryService::new();
        assert!(service.distinct_privileges(&[]).is_empty());
        assert!(service.distinct_privileges(&[user("A", "B", 3)]).is_empty());
    }

    #[test]
    fn test_find_user_older_than() {
        let service = UserQueryService::new();
        let users = vec![user("A", "X", 20), user("B", "X", 30), user("C", "X", 40)];

        let found = service.find_user_older_than(&users, 25).unwrap();
        assert!(found.age > 25);
        assert!(service.find_user_older_than(&users, 100).is_none());
        assert!(service.find_user_older_than(&users, 40).is_none());
    }

    #[test]
    fn test_group_by_privilege_count() {
        let service = UserQueryService::new();
        let users = roster();

        let groups = service.group_by_privilege_count(&users);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 4]);
        assert_eq!(first_names(&groups[&2]), vec!["Anna", "Maria"]);
        assert_eq!(first_names(&groups[&0]), vec!["Liam"]);
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), users.len());
    }

    #[test]
    fn test_average_age() {
        let service = UserQueryService::new();
        assert_eq!(service.average_age(&[]), -1.0);
        assert_eq!(service.average_age(&[user("A", "B", 33)]), 33.0);
        assert_eq!(
            service.average_age(&[user("A", "B", 20), user("C", "D", 25)]),
            22.5
        );
    }

    #[test]
    fn test_most_frequent_last_name() {
        let service = UserQueryService::new();

        let users = vec![
            user("A", "Smith", 1),
            user("B", "Smith", 1),
            user("C", "Jones", 1),
        ];
        assert_eq!(service.most_frequent_last_name(&users), Some("Smith".to_string()));

        let users = vec![user("A", "Smith", 1), user("C", "Jones", 1)];
        assert_eq!(service.most_frequent_last_name(&users), None);

        assert_eq!(service.most_frequent_last_name(&[]), None);
    }

    #[test]
    fn test_most_frequent_last_name_prefers_highest_count() {
        let service = UserQueryService::new();
        let users = vec![
            user("A", "Jones", 1),
            user("B", "Jones", 1),
            user("C", "Smith", 1),
            user("D", "Smith", 1),
            user("E", "Smith", 1),
        ];
        assert_eq!(service.most_frequent_last_name(&users), Some("Smith".to_string()));
    }

    #[test]
    fn test_most_frequent_last_name_tie_goes_to_first_seen() {
        let service = UserQueryService::new();
        let users = vec![
            user("A", "Jones", 1),
            user("B", "Smith", 1),
            user("C", "Smith", 1),
            user("D", "Jones", 1),
        ];
        assert_eq!(service.most_frequent_last_name(&users), Some("Jones".to_string()));
    }

    #[test]
    fn test_filter_by_no_predicates_is_identity() {
        let service = UserQueryService::new();
        let users = roster();

        let filtered = service.filter_by(&users, &[]);
        let expected: Vec<&User> = users.iter().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_filter_by_combines_with_and() {
        let service = UserQueryService::new();
        let users = roster();

        let over_30: UserPredicate = &|u: &User| u.age > 30;
        let smith: UserPredicate = &|u: &User| u.last_name == "Smith";

        assert_eq!(first_names(&service.filter_by(&users, &[over_30])), vec!["John", "Anna", "Maria"]);
        assert_eq!(first_names(&service.filter_by(&users, &[over_30, smith])), vec!["John", "Anna"]);
    }

    #[test]
    fn test_filter_by_short_circuits() {
        let service = UserQueryService::new();
        let users = roster();
        let calls = std::cell::Cell::new(0);

        let reject: UserPredicate = &|_: &User| false;
        let counting: UserPredicate = &|_: &User| {
            calls.set(calls.get() + 1);
            true
        };

        assert!(service.filter_by(&users, &[reject, counting]).is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_join() {
        let service = UserQueryService::new();
        let users = vec![user("A", "X", 1), user("B", "X", 2), user("C", "X", 3)];

        assert_eq!(service.join(&users, ", ", |u| u.first_name.clone()), "A, B, C");
        assert_eq!(service.join(&users[..1], ", ", |u| u.first_name.clone()), "A");
        assert_eq!(service.join(&[], ", ", |u| u.first_name.clone()), "");
        assert_eq!(service.join(&users, "", |u| u.age.to_string()), "123");
    }

    #[test]
    fn test_group_by_privilege() {
        let service = UserQueryService::new();
        let users = vec![
            user("A", "X", 1).with_privileges([Read, Update]),
            user("B", "X", 1).with_privileges([Update]),
            user("C", "X", 1),
        ];

        let groups = service.group_by_privilege(&users);
        assert_eq!(groups.len(), 2);
        assert_eq!(first_names(&groups[&Read]), vec!["A"]);
        assert_eq!(first_names(&groups[&Update]), vec!["A", "B"]);
        assert!(!groups.contains_key(&Delete));
    }

    #[test]
    fn test_duplicate_privileges_are_kept() {
        let service = UserQueryService::new();
        let users = vec![user("A", "X", 1).with_privileges([Read, Read])];

        let by_privilege = service.group_by_privilege(&users);
        assert_eq!(first_names(&by_privilege[&Read]), vec!["A", "A"]);

        let by_count = service.group_by_privilege_count(&users);
        assert_eq!(by_count.keys().copied().collect::<Vec<_>>(), vec![2]);

        assert_eq!(service.distinct_privileges(&users), vec![Read]);
    }

    #[test]
    fn test_count_by_last_name() {
        let service = UserQueryService::new();
        let users = roster();

        let counts = service.count_by_last_name(&users);
        assert_eq!(counts["Smith"], 2);
        assert_eq!(counts["Garcia"], 1);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.values().sum::<usize>(), users.len());
    }

    #[test]
    fn test_queries_leave_input_untouched() {
        let service = UserQueryService::new();
        let users = roster();
        let before = users.clone();

        service.first_names_reverse_sorted(&users);
        service.sort_by_age_desc_and_name_asc(&users);
        service.group_by_privilege(&users);

        assert_eq!(users, before);
    }
}
