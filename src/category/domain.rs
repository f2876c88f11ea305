//! Core category domain types.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{MapAccess, Visitor, value::MapAccessDeserializer},
};

use crate::Error;

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is
    /// empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for a category.
pub type CategoryId = i64;

/// A category, e.g., 'Electronics' or 'Books'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// Assigned by the repository when the category is created.
    pub id: CategoryId,
    /// The name of the category.
    pub name: CategoryName,
    /// An optional longer description.
    pub description: Option<String>,
}

/// The fields of a category that the client controls.
///
/// Used for both creating and replacing a category. It has no ID, so an
/// update can only ever target the ID it is given separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// The name of the category.
    pub name: CategoryName,
    /// An optional longer description.
    pub description: Option<String>,
}

impl NewCategory {
    /// Attach `id` to create the stored form of the category.
    pub fn with_id(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

/// The JSON body for creating or updating a category.
///
/// The body must be an object: `name` is required and unknown fields are
/// rejected. An `id` may be sent, but it is ignored: new categories get a
/// generated ID and updates use the ID from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPayload {
    /// Ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    /// The unvalidated category name.
    pub name: String,
    /// An optional longer description.
    pub description: Option<String>,
}

/// The fields of [CategoryPayload] as they appear in a JSON object.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryPayloadFields {
    #[serde(default)]
    id: Option<CategoryId>,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl<'de> Deserialize<'de> for CategoryPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A derived struct also accepts its fields as a sequence, e.g.
        // `[null, "Books"]`, so only maps are passed to the derived impl.
        struct ObjectVisitor;

        impl<'de> Visitor<'de> for ObjectVisitor {
            type Value = CategoryPayloadFields;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a category object")
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                CategoryPayloadFields::deserialize(MapAccessDeserializer::new(map))
            }
        }

        let fields = deserializer.deserialize_map(ObjectVisitor)?;

        Ok(CategoryPayload {
            id: fields.id,
            name: fields.name,
            description: fields.description,
        })
    }
}

impl CategoryPayload {
    /// Validate the payload.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyCategoryName] if the name is empty.
    pub fn validate(self) -> Result<NewCategory, Error> {
        Ok(NewCategory {
            name: CategoryName::new(&self.name)?,
            description: self.description,
        })
    }
}

#[cfg(test)]
mod category_name_tests {
    use crate::{Error, category::CategoryName};

    #[test]
    fn new_fails_on_empty_string() {
        let category_name = CategoryName::new("");

        assert_eq!(category_name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        let category_name = CategoryName::new("\n\t \r");

        assert_eq!(category_name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_succeeds_on_non_empty_string() {
        let category_name = CategoryName::new("🔥");

        assert!(category_name.is_ok())
    }

    #[test]
    fn new_trims_whitespace() {
        let category_name = CategoryName::new("  Books \n").unwrap();

        assert_eq!(category_name.as_ref(), "Books");
    }
}
