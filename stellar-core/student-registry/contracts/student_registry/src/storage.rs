use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: u32,
    pub course: String,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    StudentCount,
    StudentId(Address),
    Student(u64),
}

pub fn get_student_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::StudentCount)
        .unwrap_or(0)
}

pub fn set_student_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::StudentCount, &count);
}

pub fn get_student_id(env: &Env, student: &Address) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::StudentId(student.clone()))
}

pub fn set_student_id(env: &Env, student: &Address, id: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::StudentId(student.clone()), &id);
}

pub fn has_student_id(env: &Env, student: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::StudentId(student.clone()))
}

pub fn get_student(env: &Env, id: u64) -> Option<Student> {
    env.storage().persistent().get(&DataKey::Student(id))
}

pub fn set_student(env: &Env, id: u64, student: &Student) {
    env.storage().persistent().set(&DataKey::Student(id), student);
}
