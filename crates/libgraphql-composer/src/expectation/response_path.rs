/// One step of a [`ResponsePath`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathSegment {
    /// The response has an indexed list at this point (rendered as `#`).
    Index,
    /// A response key (the field's alias, or its name when unaliased).
    Key(String),
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index => f.write_str("#"),
            Self::Key(key) => f.write_str(key),
        }
    }
}
impl serde::Serialize for PathSegment {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The location of a field within the response, from the operation root.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ResponsePath(Vec<PathSegment>);
impl ResponsePath {
    /// Extend this path with `response_key`, followed by an
    /// [`Index`](PathSegment::Index) segment when the field resolves to a list.
    pub fn child(&self, response_key: &str, is_list: bool) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(response_key.to_string()));
        if is_list {
            segments.push(PathSegment::Index);
        }
        Self(segments)
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        self.0.as_slice()
    }
}
impl std::fmt::Display for ResponsePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, segment) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
