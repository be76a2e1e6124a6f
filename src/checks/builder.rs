//! Fluent builder for collections of checks.

use super::check::Check;
use crate::error::Result;
use crate::inspector::Inspector;

/// Builds up the checks to perform during a jailbreak test.
///
/// Every added check is expanded against each root path known at the time
/// of the call. The root list starts with a single empty root, so a check
/// added before any [`add_roots`](Self::add_roots) is taken verbatim.
/// Roots added later never apply to earlier checks.
///
/// If the roots need a separator, either always include it in the roots or
/// always include it in the added values.
///
/// # Example
///
/// ```
/// use cryoprison::checks::Checks;
///
/// let checks = Checks::new()
///     .add_roots(["/a/", "/b/"])
///     .add("x", "y");
///
/// let values: Vec<_> = checks.checks().iter().map(|c| c.value()).collect();
/// assert_eq!(values, ["y", "/a/y", "/b/y"]);
/// ```
#[derive(Debug, Clone)]
pub struct Checks {
    root_paths: Vec<String>,
    checks: Vec<Check>,
}

impl Checks {
    /// Create a builder with only the empty root.
    pub fn new() -> Self {
        Self {
            root_paths: vec![String::new()],
            checks: Vec::new(),
        }
    }

    /// Append roots, in order, to the root paths.
    pub fn add_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_paths.extend(roots.into_iter().map(Into::into));
        self
    }

    /// Add one check per current root, with the value `root + suffix`.
    pub fn add(mut self, check_id: &str, suffix: &str) -> Self {
        for root in &self.root_paths {
            self.checks
                .push(Check::new(check_id, format!("{}{}", root, suffix)));
        }

        tracing::trace!(
            check_id,
            suffix,
            roots = self.root_paths.len(),
            "added check"
        );
        self
    }

    /// Add a check for each suffix, in order.
    pub fn add_many<I, S>(mut self, check_id: &str, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for suffix in suffixes {
            self = self.add(check_id, suffix.as_ref());
        }
        self
    }

    /// The root paths, starting with the empty default root.
    pub fn root_paths(&self) -> &[String] {
        &self.root_paths
    }

    /// The accumulated checks, in insertion order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Number of accumulated checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no checks have been added.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Build one value per check with an explicit factory.
    ///
    /// The factory receives the upper-cased check id and the expanded value.
    /// The first error aborts the whole projection.
    pub fn inspectors_with<I, F>(&self, mut factory: F) -> Result<Vec<I>>
    where
        F: FnMut(&str, &str) -> Result<I>,
    {
        self.checks
            .iter()
            .map(|check| factory(&check.normalized_id(), check.value()))
            .collect()
    }

    /// Build a fresh, initialized inspector of type `T` for every check.
    ///
    /// Each call constructs new inspectors; nothing is cached.
    pub fn get_inspectors<T>(&self) -> Result<Vec<Box<dyn Inspector>>>
    where
        T: Inspector + Default + 'static,
    {
        tracing::debug!(
            inspector = std::any::type_name::<T>(),
            checks = self.checks.len(),
            "building inspectors"
        );

        self.inspectors_with(|check_id, value| {
            T::default()
                .init(check_id, value)
                .map(|inspector| Box::new(inspector) as Box<dyn Inspector>)
        })
    }
}

impl Default for Checks {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CryoprisonError;
    use crate::inspector::FileNotPresent;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct Recording {
        id: String,
        value: String,
    }

    impl Inspector for Recording {
        fn init(mut self, check_id: &str, value: &str) -> Result<Self> {
            self.id = check_id.to_string();
            self.value = value.to_string();
            Ok(self)
        }
        fn check_id(&self) -> &str {
            &self.id
        }
        fn value(&self) -> &str {
            &self.value
        }
        fn ok(&self) -> bool {
            true
        }
    }

    #[derive(Debug, Default)]
    struct RejectsBad;

    impl Inspector for RejectsBad {
        fn init(self, check_id: &str, value: &str) -> Result<Self> {
            if value == "bad" {
                return Err(CryoprisonError::InspectorInit {
                    check_id: check_id.to_string(),
                    message: "bad value".to_string(),
                });
            }
            Ok(self)
        }
        fn check_id(&self) -> &str {
            ""
        }
        fn value(&self) -> &str {
            ""
        }
        fn ok(&self) -> bool {
            true
        }
    }

    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug)]
    struct Counted;

    impl Default for Counted {
        fn default() -> Self {
            CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
            Counted
        }
    }

    impl Inspector for Counted {
        fn init(self, _check_id: &str, _value: &str) -> Result<Self> {
            Ok(self)
        }
        fn check_id(&self) -> &str {
            ""
        }
        fn value(&self) -> &str {
            ""
        }
        fn ok(&self) -> bool {
            true
        }
    }

    fn pairs(inspectors: &[Box<dyn Inspector>]) -> Vec<(String, String)> {
        inspectors
            .iter()
            .map(|i| (i.check_id().to_string(), i.value().to_string()))
            .collect()
    }

    #[test]
    fn new_has_single_empty_root() {
        let checks = Checks::new();
        assert_eq!(checks.root_paths(), [""]);
        assert!(checks.is_empty());
    }

    #[test]
    fn add_roots_appends_in_call_order() {
        let checks = Checks::new()
            .add_roots(["/a/", "/b/"])
            .add_roots(Vec::<String>::new())
            .add_roots(["/c/"]);
        assert_eq!(checks.root_paths(), ["", "/a/", "/b/", "/c/"]);
    }

    #[test]
    fn add_expands_against_every_root() {
        let checks = Checks::new().add_roots(["/a/", "/b/"]).add("x", "y");

        assert_eq!(checks.len(), 3);
        for (check, root) in checks.checks().iter().zip(checks.root_paths()) {
            assert_eq!(check.check_id(), "x");
            assert_eq!(check.value(), format!("{}y", root));
        }
    }

    #[test]
    fn roots_added_later_do_not_apply_to_earlier_checks() {
        let checks = Checks::new()
            .add("early", "v")
            .add_roots(["/r/"])
            .add("late", "v");

        let values: Vec<_> = checks
            .checks()
            .iter()
            .map(|c| (c.check_id(), c.value()))
            .collect();
        assert_eq!(
            values,
            [("early", "v"), ("late", "v"), ("late", "/r/v")]
        );
    }

    #[test]
    fn add_many_iterates_suffixes_outer_roots_inner() {
        let checks = Checks::new().add_roots(["/r/"]).add_many("k", ["v1", "v2"]);

        let values: Vec<_> = checks.checks().iter().map(|c| c.value()).collect();
        assert_eq!(values, ["v1", "/r/v1", "v2", "/r/v2"]);
    }

    #[test]
    fn add_many_matches_repeated_add() {
        let many = Checks::new()
            .add_roots(["/a/", "/b/"])
            .add_many("k", ["one", "two", "three"]);
        let single = Checks::new()
            .add_roots(["/a/", "/b/"])
            .add("k", "one")
            .add("k", "two")
            .add("k", "three");

        assert_eq!(many.checks(), single.checks());
    }

    #[test]
    fn add_many_with_no_suffixes_adds_nothing() {
        let checks = Checks::new().add_roots(["/r/"]).add_many("k", Vec::<&str>::new());
        assert!(checks.is_empty());
    }

    #[test]
    fn add_does_not_deduplicate() {
        let checks = Checks::new().add("x", "y").add("x", "y");
        assert_eq!(checks.len(), 2);
    }

    #[test]
    fn single_check_builds_uppercased_inspector() {
        let inspectors = Checks::new()
            .add("foo", "bar")
            .get_inspectors::<Recording>()
            .unwrap();

        assert_eq!(pairs(&inspectors), [("FOO".to_string(), "bar".to_string())]);
    }

    #[test]
    fn rooted_check_builds_inspector_per_root() {
        let inspectors = Checks::new()
            .add_roots(["/a/", "/b/"])
            .add("x", "y")
            .get_inspectors::<Recording>()
            .unwrap();

        assert_eq!(
            pairs(&inspectors),
            [
                ("X".to_string(), "y".to_string()),
                ("X".to_string(), "/a/y".to_string()),
                ("X".to_string(), "/b/y".to_string()),
            ]
        );
    }

    #[test]
    fn multiple_values_build_in_order() {
        let inspectors = Checks::new()
            .add_many("k", ["v1", "v2"])
            .get_inspectors::<Recording>()
            .unwrap();

        assert_eq!(
            pairs(&inspectors),
            [
                ("K".to_string(), "v1".to_string()),
                ("K".to_string(), "v2".to_string()),
            ]
        );
    }

    #[test]
    fn projection_uppercases_per_character() {
        let inspectors = Checks::new()
            .add("straße", "/x")
            .add("\u{FB01}le", "/y")
            .get_inspectors::<FileNotPresent>()
            .unwrap();

        let ids: Vec<_> = inspectors.iter().map(|i| i.check_id()).collect();
        assert_eq!(ids, ["STRAßE", "\u{FB01}LE"]);
    }

    #[test]
    fn stored_check_id_keeps_casing_after_projection() {
        let checks = Checks::new().add("MiXeD", "v");
        let _ = checks.get_inspectors::<Recording>().unwrap();
        assert_eq!(checks.checks()[0].check_id(), "MiXeD");
    }

    #[test]
    fn empty_builder_builds_no_inspectors() {
        let inspectors = Checks::new().get_inspectors::<Recording>().unwrap();
        assert!(inspectors.is_empty());
    }

    #[test]
    fn init_failure_aborts_the_projection() {
        let result = Checks::new()
            .add_many("k", ["good", "bad", "good"])
            .get_inspectors::<RejectsBad>();

        match result {
            Err(CryoprisonError::InspectorInit { check_id, .. }) => assert_eq!(check_id, "K"),
            other => panic!("expected InspectorInit, got {:?}", other),
        }
    }

    #[test]
    fn each_call_constructs_fresh_inspectors() {
        let checks = Checks::new().add_many("k", ["a", "b"]);

        let before = CONSTRUCTED.load(Ordering::SeqCst);
        let first = checks.get_inspectors::<Counted>().unwrap();
        let second = checks.get_inspectors::<Counted>().unwrap();
        let after = CONSTRUCTED.load(Ordering::SeqCst);

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert_eq!(after - before, 4);
    }

    #[test]
    fn inspectors_with_passes_normalized_pairs() {
        let built = Checks::new()
            .add_roots(["/r/"])
            .add("su", "bin/su")
            .inspectors_with(|id, value| Ok(format!("{}={}", id, value)))
            .unwrap();

        assert_eq!(built, ["SU=bin/su", "SU=/r/bin/su"]);
    }
}
