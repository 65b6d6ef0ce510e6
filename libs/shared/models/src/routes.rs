//! Logical destinations of the portal and their paths.

use serde::Serialize;

use crate::auth::UserRole;

pub const HOME: &str = "/";

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const DOCTOR_ONBOARDING: &str = "/doctor/onboarding";
pub const ADMIN_SETUP: &str = "/admin/setup";

pub const PATIENT_DASHBOARD: &str = "/patient/dashboard";
pub const DOCTOR_DASHBOARD: &str = "/doctor/dashboard";
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";

#[derive(Debug, Clone, Serialize)]
pub struct RouteTable {
    pub home: &'static str,
    pub auth: AuthRoutes,
    pub dashboards: DashboardRoutes,
    pub roles: Vec<UserRole>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthRoutes {
    pub login: &'static str,
    pub register: &'static str,
    pub doctor_onboarding: &'static str,
    pub admin_setup: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardRoutes {
    pub patient: &'static str,
    pub doctor: &'static str,
    pub admin: &'static str,
}

pub fn route_table() -> RouteTable {
    RouteTable {
        home: HOME,
        auth: AuthRoutes {
            login: AUTH_LOGIN,
            register: AUTH_REGISTER,
            doctor_onboarding: DOCTOR_ONBOARDING,
            admin_setup: ADMIN_SETUP,
        },
        dashboards: DashboardRoutes {
            patient: UserRole::Patient.dashboard_route(),
            doctor: UserRole::Doctor.dashboard_route(),
            admin: UserRole::Admin.dashboard_route(),
        },
        roles: vec![UserRole::Patient, UserRole::Doctor, UserRole::Admin],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboards_follow_role() {
        let table = route_table();
        assert_eq!(table.dashboards.patient, "/patient/dashboard");
        assert_eq!(table.dashboards.doctor, "/doctor/dashboard");
        assert_eq!(table.dashboards.admin, "/admin/dashboard");
        assert_eq!(table.auth.doctor_onboarding, "/doctor/onboarding");
    }

    #[test]
    fn roles_round_trip_through_strings() {
        for role in route_table().roles {
            assert_eq!(role.as_str().parse::<UserRole>(), Ok(role));
        }
        assert!("nurse".parse::<UserRole>().is_err());
    }
}
