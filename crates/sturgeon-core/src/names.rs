use parking_lot::RwLock;
use std::collections::HashMap;

/// Characters removed outright before any other rewrite.
const STRIPPED: &[char] = &['[', '(', ')', '?', '@', '#', ']'];

/// Bidirectional mapping between store names and protocol identifiers.
///
/// Store field and collection names may contain spaces, punctuation or a
/// leading digit, none of which are legal in the typed query protocol.
/// `Names` rewrites them into safe identifiers and remembers each binding so
/// arguments and selections can be translated back to the original name.
///
/// One instance is created at startup and shared by every schema build and
/// resolver. Bindings are never removed. When two originals normalize to the
/// same identifier the reverse lookup keeps the most recent registration.
#[derive(Debug, Default)]
pub struct Names {
    bindings: RwLock<Bindings>,
}

#[derive(Debug, Default)]
struct Bindings {
    to_normalized: HashMap<String, String>,
    to_original: HashMap<String, String>,
}

impl Names {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrites `name` into a protocol-safe identifier without registering it.
    ///
    /// Rules, applied in order:
    ///
    /// 1. `[`, `(`, `)`, `?`, `@`, `#`, `]` are removed.
    /// 2. A leading `+` becomes `plus_`, a leading `-` becomes `minus_`.
    /// 3. Whitespace, path separators and any other character outside
    ///    `[A-Za-z0-9_]` become `_`.
    /// 4. A leading digit is prefixed with `_`.
    pub fn normalize(name: &str) -> String {
        let stripped: String = name.chars().filter(|c| !STRIPPED.contains(c)).collect();

        let (prefix, rest) = if let Some(rest) = stripped.strip_prefix('+') {
            ("plus_", rest)
        } else if let Some(rest) = stripped.strip_prefix('-') {
            ("minus_", rest)
        } else {
            ("", stripped.as_str())
        };

        let mut normalized = String::with_capacity(prefix.len() + rest.len() + 1);
        normalized.push_str(prefix);
        normalized.extend(rest.chars().map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        }));

        if normalized.starts_with(|c: char| c.is_ascii_digit()) {
            normalized.insert(0, '_');
        }

        if normalized.is_empty() {
            normalized.push('_');
        }

        normalized
    }

    /// Normalizes `name`, stores the binding in both directions and returns
    /// the identifier. Registering the same name again is a no-op.
    pub fn register(&self, name: &str) -> String {
        let normalized = Self::normalize(name);

        let mut bindings = self.bindings.write();

        if let Some(previous) = bindings.to_original.get(&normalized) {
            if previous != name {
                tracing::warn!(
                    normalized = %normalized,
                    previous = %previous,
                    original = %name,
                    "normalized name collision; reverse lookup now resolves to the latest name"
                );
            }
        }

        bindings
            .to_original
            .insert(normalized.clone(), name.to_string());
        bindings
            .to_normalized
            .insert(name.to_string(), normalized.clone());

        normalized
    }

    /// Returns the identifier previously registered for `original`.
    pub fn to_normalized(&self, original: &str) -> Option<String> {
        self.bindings.read().to_normalized.get(original).cloned()
    }

    /// Returns the original name most recently registered for `normalized`.
    pub fn to_original(&self, normalized: &str) -> Option<String> {
        self.bindings.read().to_original.get(normalized).cloned()
    }

    /// Number of registered original names.
    pub fn len(&self) -> usize {
        self.bindings.read().to_normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
