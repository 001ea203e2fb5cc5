use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": "6b1f3c1e-5a0e-4c57-9a43-3c2d0f0f8a11",
        "name": "Ada Lovelace",
        "email": "ada@company.com",
        "phone": "+441234567",
        "position": "Engineer",
        "picture": "https://images.example.com/ada.png",
        "salary": "5000"
    })
)]
pub struct Employee {
    #[schema(example = "6b1f3c1e-5a0e-4c57-9a43-3c2d0f0f8a11")]
    pub id: String,

    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "ada@company.com")]
    pub email: String,

    #[schema(example = "+441234567")]
    pub phone: String,

    #[schema(example = "Engineer", nullable = true)]
    pub position: Option<String>,

    #[schema(example = "https://images.example.com/ada.png", nullable = true)]
    pub picture: Option<String>,

    /// Free text, never parsed as a number.
    #[schema(example = "5000", nullable = true)]
    pub salary: Option<String>,
}

/// Attributes for a record that does not exist yet.
///
/// Required fields default to empty so a missing field reaches the store and
/// is rejected there, like any other constraint.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct NewEmployee {
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "ada@company.com", format = "email")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "+441234567")]
    pub phone: String,
    #[schema(example = "Engineer")]
    pub position: Option<String>,
    #[schema(example = "https://images.example.com/ada.png")]
    pub picture: Option<String>,
    #[schema(example = "5000")]
    pub salary: Option<String>,
}

/// Fields to overwrite on an existing record; `None` leaves a field as is.
///
/// Optional columns distinguish a missing key from an explicit `null`:
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub position: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub picture: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub salary: Option<Option<String>>,
}

/// A key that is present, `null` included, deserializes to `Some`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Longest address RFC 5321 allows.
pub const EMAIL_MAX_LEN: usize = 320;

fn require(field: &str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::ConstraintViolation(format!(
            "`{field}` is required"
        )));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), StoreError> {
    require("email", email)?;
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(StoreError::ConstraintViolation(format!(
            "`email` is longer than {EMAIL_MAX_LEN} characters"
        )));
    }
    Ok(())
}

impl NewEmployee {
    pub fn validate(&self) -> Result<(), StoreError> {
        require("name", &self.name)?;
        check_email(&self.email)?;
        require("phone", &self.phone)
    }

    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            position: self.position,
            picture: self.picture,
            salary: self.salary,
        }
    }
}

impl EmployeePatch {
    /// Required fields may be left out of a patch but never blanked.
    pub fn validate(&self) -> Result<(), StoreError> {
        if let Some(name) = &self.name {
            require("name", name)?;
        }
        if let Some(email) = &self.email {
            check_email(email)?;
        }
        if let Some(phone) = &self.phone {
            require("phone", phone)?;
        }
        Ok(())
    }

    /// Column/value pairs for the fields present, in table order. A `None`
    /// value means the column is set to NULL.
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| (column, Some(v))));

        let optional = [
            ("position", &self.position),
            ("picture", &self.picture),
            ("salary", &self.salary),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_ref().map(|v| (column, v.as_deref())));

        required.chain(optional).collect()
    }

    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(phone) = self.phone {
            employee.phone = phone;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(picture) = self.picture {
            employee.picture = picture;
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> NewEmployee {
        NewEmployee {
            name: "Ada".into(),
            email: "ada@x.com".into(),
            phone: "123".into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_employee_requires_name_email_phone() {
        assert!(ada().validate().is_ok());

        let blank_email = NewEmployee {
            email: "   ".into(),
            ..ada()
        };
        assert!(matches!(
            blank_email.validate(),
            Err(StoreError::ConstraintViolation(_))
        ));

        let missing: NewEmployee = serde_json::from_str(r#"{"name":"Ada","email":"a@x.com"}"#).unwrap();
        assert!(missing.validate().is_err());
    }

    #[test]
    fn patch_only_overwrites_present_fields() {
        let mut employee = ada().into_employee("id-1".into());
        employee.salary = Some("100".into());

        let patch = EmployeePatch {
            name: Some("Ada2".into()),
            position: Some(Some("CTO".into())),
            ..Default::default()
        };
        assert_eq!(
            patch.fields(),
            vec![("name", Some("Ada2")), ("position", Some("CTO"))]
        );
        patch.apply_to(&mut employee);

        assert_eq!(employee.id, "id-1");
        assert_eq!(employee.name, "Ada2");
        assert_eq!(employee.email, "ada@x.com");
        assert_eq!(employee.position.as_deref(), Some("CTO"));
        assert_eq!(employee.salary.as_deref(), Some("100"));
    }

    #[test]
    fn patch_rejects_blank_required_field() {
        let patch = EmployeePatch {
            phone: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(EmployeePatch::default().validate().is_ok());
        assert!(EmployeePatch::default().fields().is_empty());
    }

    #[test]
    fn null_clears_optional_field_but_missing_key_keeps_it() {
        let mut employee = ada().into_employee("id-1".into());
        employee.position = Some("CTO".into());
        employee.salary = Some("100".into());

        let patch: EmployeePatch = serde_json::from_str(r#"{"position": null}"#).unwrap();
        assert_eq!(patch.position, Some(None));
        assert_eq!(patch.salary, None);
        assert_eq!(patch.fields(), vec![("position", None)]);

        patch.apply_to(&mut employee);
        assert_eq!(employee.position, None);
        assert_eq!(employee.salary.as_deref(), Some("100"));
    }

    #[test]
    fn null_on_required_field_is_ignored() {
        let patch: EmployeePatch = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(patch.name, None);
        assert!(patch.fields().is_empty());
    }

    #[test]
    fn email_longer_than_limit_is_rejected() {
        let long = format!("{}@x.com", "a".repeat(EMAIL_MAX_LEN));
        let attrs = NewEmployee {
            email: long.clone(),
            ..ada()
        };
        assert!(matches!(
            attrs.validate(),
            Err(StoreError::ConstraintViolation(_))
        ));

        let patch = EmployeePatch {
            email: Some(long),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
