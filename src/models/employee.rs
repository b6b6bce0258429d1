use serde::{Deserialize, Serialize};

/// Server-owned employee record. `employee_id` is the business key the rest
/// of the API addresses employees by; `id` is the server's own identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EmployeeCreateInput {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeCreateInput {
    /// Required-field check, the only validation performed on this side.
    /// Everything else (uniqueness, email format) is the server's call.
    pub fn validate(&self) -> Result<(), String> {
        let all_present = [
            &self.employee_id,
            &self.full_name,
            &self.email,
            &self.department,
        ]
        .iter()
        .all(|field| !field.trim().is_empty());

        if all_present {
            Ok(())
        } else {
            Err("All fields are required.".to_string())
        }
    }
}
