//! Common test utilities and shared employee fixtures

#![allow(dead_code)]

use employee_service::{EmployeeDraft, Role};

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Ann Lee, no roles, no promo codes
pub fn ann_lee() -> EmployeeDraft {
    EmployeeDraft {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email: "a@x.com".to_string(),
        roles: vec![],
        applied_promocodes_count: 0,
    }
}

/// Bob Stone, partner manager with a few applied promo codes
pub fn bob_stone() -> EmployeeDraft {
    EmployeeDraft {
        first_name: "Bob".to_string(),
        last_name: "Stone".to_string(),
        email: "bob@x.com".to_string(),
        roles: vec![Role::new("PartnerManager", "Partner manager")],
        applied_promocodes_count: 3,
    }
}

/// Carol Diaz, admin and partner manager
pub fn carol_diaz() -> EmployeeDraft {
    EmployeeDraft {
        first_name: "Carol".to_string(),
        last_name: "Diaz".to_string(),
        email: "carol@x.com".to_string(),
        roles: vec![
            Role::new("Admin", "Administrator"),
            Role::new("PartnerManager", "Partner manager"),
        ],
        applied_promocodes_count: 12,
    }
}
