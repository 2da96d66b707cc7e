/// The sub-fields a caller asked for on one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    pub fields: Vec<Selection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    pub selection_set: SelectionSet,
}

impl SelectionSet {
    pub fn new() -> SelectionSet {
        SelectionSet::default()
    }

    /// A flat selection of leaf fields.
    pub fn leaves<I, S>(names: I) -> SelectionSet
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Selection::leaf).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.fields.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Selection> {
        self.fields.iter().find(|selection| selection.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Selection {
    pub fn leaf(name: impl Into<String>) -> Selection {
        Selection {
            name: name.into(),
            selection_set: SelectionSet::default(),
        }
    }

    pub fn object(name: impl Into<String>, selection_set: SelectionSet) -> Selection {
        Selection {
            name: name.into(),
            selection_set,
        }
    }
}

impl FromIterator<Selection> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = Selection>>(iter: T) -> Self {
        SelectionSet {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a Selection;
    type IntoIter = std::slice::Iter<'a, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
