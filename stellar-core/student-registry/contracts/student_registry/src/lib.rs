#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String, Vec};

mod events;
mod storage;

pub use storage::Student;

/// Contract interface version.
pub const VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[contracterror]
#[repr(u32)]
pub enum RegistryError {
    /// Name cannot be empty.
    EmptyName = 1,
    /// Age must be greater than zero.
    InvalidAge = 2,
    /// Student is already registered.
    AlreadyRegistered = 3,
    /// Student is not registered.
    NotRegistered = 4,
}

#[contract]
pub struct StudentRegistry;

#[contractimpl]
impl StudentRegistry {
    // ========================================================================
    // Registration
    // ========================================================================

    /// Register the calling address as a student and return its new id.
    ///
    /// Ids are sequential and start at 1. An address can register only once.
    pub fn register(
        env: Env,
        student: Address,
        name: String,
        age: u32,
        course: String,
    ) -> Result<u64, RegistryError> {
        student.require_auth();

        if let Err(err) = validate(&name, age) {
            let code = err as u32;
            log!(&env, "registration rejected", student, code);
            return Err(err);
        }

        if storage::has_student_id(&env, &student) {
            log!(&env, "registration rejected: already registered", student);
            return Err(RegistryError::AlreadyRegistered);
        }

        let id = storage::get_student_count(&env) + 1;
        let record = Student {
            name: name.clone(),
            age,
            course: course.clone(),
        };

        storage::set_student(&env, id, &record);
        storage::set_student_id(&env, &student, id);
        storage::set_student_count(&env, id);

        events::student_registered(&env, &student, &name, age, &course);
        log!(&env, "student registered", student, id);

        Ok(id)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Return the calling student's own record.
    pub fn view_my_data(env: Env, student: Address) -> Result<Student, RegistryError> {
        student.require_auth();

        let id = require_registered(&env, &student)?;
        storage::get_student(&env, id).ok_or(RegistryError::NotRegistered)
    }

    /// All registered students in registration order.
    pub fn view_all_students(env: Env) -> Vec<Student> {
        let count = storage::get_student_count(&env);
        let mut students = Vec::new(&env);
        for id in 1..=count {
            if let Some(record) = storage::get_student(&env, id) {
                students.push_back(record);
            }
        }
        students
    }

    /// Up to `limit` students in registration order, skipping the first `start`.
    ///
    /// Reads one ledger entry per record, so large registries should be paged
    /// through this instead of `view_all_students`.
    pub fn view_students(env: Env, start: u64, limit: u32) -> Vec<Student> {
        let count = storage::get_student_count(&env);
        let end = start.saturating_add(limit as u64).min(count);
        let mut students = Vec::new(&env);
        for id in start.saturating_add(1)..=end {
            if let Some(record) = storage::get_student(&env, id) {
                students.push_back(record);
            }
        }
        students
    }

    /// Id assigned to `student`, or 0 when the address never registered.
    pub fn student_id(env: Env, student: Address) -> u64 {
        storage::get_student_id(&env, &student).unwrap_or(0)
    }

    /// Get a student record by id
    pub fn get_student(env: Env, id: u64) -> Option<Student> {
        storage::get_student(&env, id)
    }

    /// Number of registered students
    pub fn student_count(env: Env) -> u64 {
        storage::get_student_count(&env)
    }

    /// Check whether an address has registered
    pub fn is_registered(env: Env, student: Address) -> bool {
        storage::has_student_id(&env, &student)
    }

    /// Contract interface version
    pub fn version(_env: Env) -> u32 {
        VERSION
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn validate(name: &String, age: u32) -> Result<(), RegistryError> {
    if name.len() == 0 {
        return Err(RegistryError::EmptyName);
    }
    if age == 0 {
        return Err(RegistryError::InvalidAge);
    }
    Ok(())
}

fn require_registered(env: &Env, student: &Address) -> Result<u64, RegistryError> {
    match storage::get_student_id(env, student) {
        Some(id) => Ok(id),
        None => {
            log!(env, "lookup rejected: not registered", student.clone());
            Err(RegistryError::NotRegistered)
        }
    }
}
