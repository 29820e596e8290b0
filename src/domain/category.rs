use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError};

/// Named, describable classification tag that can be switched on and off.
///
/// Identity is the [`CategoryId`]: two categories compare equal when their
/// ids match, whatever their other fields hold.
#[derive(Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Unvalidated data required to build a [`Category`].
///
/// Missing ids are generated on conversion; the description defaults to an
/// empty string and new categories start active.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCategory {
    pub id: Option<CategoryId>,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            is_active: true,
        }
    }

    pub fn id(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl TryFrom<NewCategory> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: NewCategory) -> Result<Self, Self::Error> {
        let name = CategoryName::new(value.name)?;
        let now = Utc::now().naive_utc();
        Ok(Self {
            id: value.id.unwrap_or_default(),
            name,
            description: value.description,
            is_active: value.is_active,
            created_at: now,
            updated_at: now,
        })
    }
}

impl Category {
    /// Builds an active category with an empty description and a fresh id.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeConstraintError> {
        NewCategory::new(name).try_into()
    }

    /// Replaces name and description.
    ///
    /// The name goes through the same checks as on construction; on error the
    /// category is left untouched.
    pub fn update_category(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), TypeConstraintError> {
        self.name = CategoryName::new(name)?;
        self.description = description.into();
        self.touch();
        Ok(())
    }

    pub fn activate(&mut self) {
        if !self.is_active {
            self.is_active = true;
            self.touch();
        }
    }

    pub fn deactivate(&mut self) {
        if self.is_active {
            self.is_active = false;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().naive_utc();
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.name, self.description, self.is_active)
    }
}

impl Debug for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Category {} ({})>", self.name, self.id)
    }
}
