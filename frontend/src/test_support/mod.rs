#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

use crate::api::Employee;

pub fn employee(id: i64, emp_id: &str, name: &str) -> Employee {
    Employee {
        id,
        emp_id: emp_id.into(),
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        department: "Engineering".into(),
        present_days: 0,
    }
}
