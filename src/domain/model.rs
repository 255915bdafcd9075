use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 預約狀態，wire 上使用後端的字串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "Reserved", alias = "confirmed", alias = "Not Checked")]
    Booked,
    #[serde(rename = "Checked in", alias = "checked_in")]
    CheckedIn,
    #[serde(rename = "Checked out", alias = "checked_out")]
    CheckedOut,
    #[serde(rename = "Cancelled", alias = "cancelled")]
    Cancelled,
    /// 後端未正規化的狀態字串，保留整筆資料不讓列表失敗
    #[serde(other)]
    Unknown,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "Reserved",
            Self::CheckedIn => "Checked in",
            Self::CheckedOut => "Checked out",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }

    /// Status only moves forward; CheckedOut and Cancelled are terminal.
    /// Nothing moves into or out of `Unknown`.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Booked, CheckedIn)
                | (Booked, CheckedOut)
                | (CheckedIn, CheckedOut)
                | (Booked, Cancelled)
                | (CheckedIn, Cancelled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled)
    }
}

impl AsRef<str> for ReservationStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: Option<String>,
    pub customer_id: String,
    pub room_id: String,
    pub platform_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub guests: u32,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default = "default_reservation_status")]
    pub status: ReservationStatus,
    #[serde(default)]
    pub booking_reference: String,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

fn default_reservation_status() -> ReservationStatus {
    ReservationStatus::Booked
}

impl Reservation {
    pub fn stay_is_valid(&self) -> bool {
        self.check_out > self.check_in
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// 建立預約的請求內容，欄位驗證交給後端
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReservation {
    pub customer_id: String,
    pub room_id: String,
    pub platform_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: f64,
    pub booking_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: Option<String>,
    pub room_number: String,
    pub room_type: String,
    #[serde(default)]
    pub max_guests: u32,
    #[serde(default)]
    pub price_per_night: f64,
    #[serde(default = "default_room_status")]
    pub status: RoomStatus,
}

fn default_room_status() -> RoomStatus {
    RoomStatus::Available
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Admin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    Urgent,
    AfterCheckout,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    #[default]
    Pending,
    Completed,
    #[serde(other)]
    Other,
}

/// Progress values the backend accepts. The empty string means "not started"
/// and is a real value, distinct from not filtering by progress at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteProgress {
    NotStarted,
    Confirm,
    InProgress,
    Finished,
}

impl NoteProgress {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "",
            Self::Confirm => "confirm",
            Self::InProgress => "In progress",
            Self::Finished => "finished",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => Some(Self::NotStarted),
            "confirm" => Some(Self::Confirm),
            "In progress" => Some(Self::InProgress),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }
}

impl AsRef<str> for NoteProgress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomNote {
    pub id: Option<String>,
    pub room_id: String,
    pub admin_id: String,
    pub note_type: NoteType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: NoteStatus,
    pub created_at: Option<String>,
    pub completed_at: Option<String>,
    pub reservation_id: Option<String>,
    pub progress: Option<String>,
}

impl RoomNote {
    pub fn is_completed(&self) -> bool {
        self.status == NoteStatus::Completed
            || self.progress.as_deref() == Some(NoteProgress::Finished.as_str())
    }

    pub fn is_urgent(&self) -> bool {
        self.note_type == NoteType::Urgent
    }

    pub fn is_after_checkout(&self) -> bool {
        self.note_type == NoteType::AfterCheckout
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRoomNote {
    pub room_id: String,
    pub admin_id: String,
    pub note_type: NoteType,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CleaningState {
    Pending,
    Complete,
}

/// 清潔工作沒有獨立實體，從房間狀態與退房後備註推導
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningTask {
    pub room_id: String,
    pub room_number: String,
    pub room_flagged: bool,
    pub open_note_ids: Vec<String>,
}

impl CleaningTask {
    pub fn state(&self) -> CleaningState {
        if self.room_flagged || !self.open_note_ids.is_empty() {
            CleaningState::Pending
        } else {
            CleaningState::Complete
        }
    }

    /// One task per room; rooms with nothing to do come back `Complete`.
    pub fn derive(rooms: &[Room], notes: &[RoomNote]) -> Vec<CleaningTask> {
        rooms
            .iter()
            .filter_map(|room| {
                let room_id = room.id.clone()?;
                let open_note_ids = notes
                    .iter()
                    .filter(|n| n.room_id == room_id && n.is_after_checkout() && !n.is_completed())
                    .filter_map(|n| n.id.clone())
                    .collect();
                Some(CleaningTask {
                    room_number: room.room_number.clone(),
                    room_flagged: room.status == RoomStatus::Cleaning,
                    room_id,
                    open_note_ids,
                })
            })
            .collect()
    }
}

// Read-only envelopes returned by the backend.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomAvailability {
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckInOutSummary {
    pub check_ins: Vec<Reservation>,
    pub check_outs: Vec<Reservation>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub today_checkins: u32,
    pub today_checkouts: u32,
    pub total_reservations: u32,
    pub active_reservations: u32,
    pub total_rooms: u32,
    pub available_rooms: u32,
    pub occupied_rooms: u32,
    pub occupancy_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthReservations {
    pub year: i32,
    pub month: u32,
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekReservations {
    pub year: i32,
    pub week: u32,
    pub week_start: String,
    pub week_end: String,
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRevenue {
    pub date: String,
    pub revenue: f64,
    pub reservations: u32,
    pub check_ins: u32,
    pub check_outs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRevenueReport {
    pub start_date: String,
    pub end_date: String,
    pub daily_data: Vec<DailyRevenue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    pub revenue: f64,
    pub reservations: u32,
    pub check_ins: u32,
    pub check_outs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRevenueReport {
    pub year: i32,
    pub monthly_data: Vec<MonthlyRevenue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformRevenue {
    pub platform: String,
    pub platform_id: String,
    pub revenue: f64,
    pub reservations: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformRevenueReport {
    pub start_date: String,
    pub end_date: String,
    pub platform_data: Vec<PlatformRevenue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerReservations {
    pub customer_id: String,
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingMovements {
    pub days: u32,
    pub upcoming_checkins: Vec<Reservation>,
    pub upcoming_checkouts: Vec<Reservation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CleaningRooms {
    pub cleaning_rooms: Vec<Room>,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UrgentNotes {
    pub urgent_notes: Vec<RoomNote>,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AfterCheckoutNotes {
    pub after_checkout_notes: Vec<RoomNote>,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertSummary {
    pub urgent_notes: Vec<RoomNote>,
    pub after_checkout_notes: Vec<RoomNote>,
    pub total_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteAck {
    pub message: String,
}

/// 報表下載內容，不解析
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub filename: Option<String>,
}
