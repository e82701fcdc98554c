//! Demo data loaded when `seed_demo_data` is enabled

use crate::contract::{Employee, Role};
use uuid::{uuid, Uuid};

pub const ADMIN_ID: Uuid = uuid!("451533d5-d8d5-4a11-9c7b-eb9f14e1a32f");
pub const PARTNER_MANAGER_ID: Uuid = uuid!("f766e2bf-340a-46ea-bff3-f1700b435895");

pub fn admin_role() -> Role {
    Role::new("Admin", "Administrator")
}

pub fn partner_manager_role() -> Role {
    Role::new("PartnerManager", "Partner manager")
}

pub fn demo_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: ADMIN_ID,
            first_name: "Ivan".to_string(),
            last_name: "Sergeev".to_string(),
            email: "owner@somemail.ru".to_string(),
            roles: vec![admin_role()],
            applied_promocodes_count: 5,
        },
        Employee {
            id: PARTNER_MANAGER_ID,
            first_name: "Petr".to_string(),
            last_name: "Andreev".to_string(),
            email: "andreev@somemail.ru".to_string(),
            roles: vec![partner_manager_role()],
            applied_promocodes_count: 10,
        },
    ]
}
