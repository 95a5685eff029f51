use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Route-keyed error aggregation. Validation walks the metadata and files
/// each message under the route of the node that produced it, so a single
/// pass can report every problem at once.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    /// Add a message at the current route.
    pub fn add(&mut self, err: impl fmt::Display) {
        self.messages.push(err.to_string());
    }

    /// Add a message under a child route.
    pub fn add_for(&mut self, route: impl Into<String>, err: impl fmt::Display) {
        self.children.entry(route.into()).or_default().add(err);
    }

    /// Graft another tree under a child route. Empty trees are dropped.
    pub fn merge(&mut self, route: impl Into<String>, other: Self) {
        if other.is_empty() {
            return;
        }

        let child = self.children.entry(route.into()).or_default();
        child.messages.extend(other.messages);
        for (key, sub) in other.children {
            child.merge(key, sub);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Flatten into `(route, message)` pairs, routes joined with `.`.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for msg in &self.messages {
            out.push((prefix.to_string(), msg.clone()));
        }
        for (key, child) in &self.children {
            let route = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            child.flatten_into(&route, out);
        }
    }

    /// `Ok(())` when nothing was recorded, otherwise the tree itself.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (route, msg)) in self.flatten().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if route.is_empty() {
                write!(f, "{msg}")?;
            } else {
                write!(f, "{route}: {msg}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

/// Record a formatted message on an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {{
        $errs.add(format!($($arg)*));
    }};
}
