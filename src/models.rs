use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    pub value: u8,
    pub color: String,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub completed_days: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppData {
    pub areas: Vec<Area>,
    pub habits: Vec<Habit>,
}

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ValueRequest {
    pub value: u8,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DayRequest {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub areas: Vec<AreaResponse>,
    pub habits: Vec<Habit>,
}

#[derive(Debug, Serialize)]
pub struct AreaResponse {
    pub id: String,
    pub index: usize,
    pub name: String,
    pub value: u8,
    pub color: String,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Serialize)]
pub struct WheelResponse {
    pub total: usize,
    pub span: f64,
    pub sectors: Vec<Sector>,
}

#[derive(Debug, Serialize)]
pub struct Sector {
    pub id: String,
    pub index: usize,
    pub name: String,
    pub value: u8,
    pub color: String,
    pub start_angle: f64,
    pub bright_d: String,
    pub pale_d: String,
    pub value_x: f64,
    pub value_y: f64,
    pub label: Label,
}

#[derive(Debug, Serialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub anchor: &'static str,
    pub lines: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HabitResponse {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u8,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Serialize)]
pub struct DayCell {
    pub date: String,
    pub day: u32,
    pub today: bool,
    pub completed: bool,
    pub clickable: bool,
}
