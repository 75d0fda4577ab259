// web_app/model/booking.rs - Multi-passenger booking form state
//
// The form is a field-array: a list of structurally identical passenger
// records keyed by a stable id. The list is rebuilt from scratch whenever the
// passenger count changes. Validation happens in two layers:
// - per-field rules, run live on every change and again on submit
// - the cross-passenger adult rule, run on submit only after every field passes

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const NAME_MIN_CHARS: usize = 1;
pub const NAME_MAX_CHARS: usize = 20;

/// Per-passenger minimum age, counted in calendar years back from today
pub const MIN_PASSENGER_AGE_YEARS: u32 = 2;

/// Cross-passenger rule: at least one passenger must reach this age
pub const ADULT_AGE_YEARS: i32 = 18;

/// Earliest date the birthdate picker accepts
pub fn earliest_birthdate() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// The date `years` calendar years before `today`
///
/// Feb 29 clamps to Feb 28 in non-leap target years.
pub fn years_before(today: NaiveDate, years: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

/// Age as the adult rule counts it: current year minus birth year
pub fn age_in_years(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - birthdate.year()
}

/// Number of passengers on a booking
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PassengerCount {
    One,
    Two,
    Three,
}

impl PassengerCount {
    pub const ALL: [PassengerCount; 3] = [PassengerCount::One, PassengerCount::Two, PassengerCount::Three];

    pub fn get(self) -> usize {
        match self {
            PassengerCount::One => 1,
            PassengerCount::Two => 2,
            PassengerCount::Three => 3,
        }
    }
}

impl TryFrom<u8> for PassengerCount {
    type Error = BookingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PassengerCount::One),
            2 => Ok(PassengerCount::Two),
            3 => Ok(PassengerCount::Three),
            other => Err(BookingError::InvalidCount(other)),
        }
    }
}

impl std::fmt::Display for PassengerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Extra checked baggage for one slot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaggageAddOn {
    #[default]
    #[serde(rename = "add0")]
    None,
    #[serde(rename = "add15")]
    Plus15Kg,
    #[serde(rename = "add20")]
    Plus20Kg,
}

impl BaggageAddOn {
    pub const ALL: [BaggageAddOn; 3] = [BaggageAddOn::None, BaggageAddOn::Plus15Kg, BaggageAddOn::Plus20Kg];

    pub fn extra_kg(self) -> u32 {
        match self {
            BaggageAddOn::None => 0,
            BaggageAddOn::Plus15Kg => 15,
            BaggageAddOn::Plus20Kg => 20,
        }
    }

    /// Value used by the radio inputs
    pub fn form_value(self) -> &'static str {
        match self {
            BaggageAddOn::None => "add0",
            BaggageAddOn::Plus15Kg => "add15",
            BaggageAddOn::Plus20Kg => "add20",
        }
    }

    pub fn from_form_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.form_value() == value)
    }
}

impl std::fmt::Display for BaggageAddOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaggageAddOn::None => write!(f, "No extra baggage"),
            BaggageAddOn::Plus15Kg => write!(f, "Extra baggage 15 kg"),
            BaggageAddOn::Plus20Kg => write!(f, "Extra baggage 20 kg"),
        }
    }
}

/// Stable identity of a passenger record
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PassengerId(Uuid);

impl PassengerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PassengerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PassengerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One seat on the booking
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: PassengerId,
    pub name: String,
    pub birthdate: Option<NaiveDate>,
    pub baggage_add_ons: Vec<BaggageAddOn>,
}

impl Passenger {
    /// A fresh record: empty name, no birthdate, one "none" baggage slot
    pub fn new() -> Self {
        Self {
            id: PassengerId::new(),
            name: String::new(),
            birthdate: None,
            baggage_add_ons: vec![BaggageAddOn::None],
        }
    }

    pub fn extra_baggage_kg(&self) -> u32 {
        self.baggage_add_ons.iter().map(|a| a.extra_kg()).sum()
    }
}

impl Default for Passenger {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated fields of a passenger
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Birthdate,
}

/// Inline error attached to a single field
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FieldError {
    #[error("Name must be at least 1 character")]
    NameTooShort,
    #[error("Name must be at most 20 characters")]
    NameTooLong,
    #[error("Birthdate is required")]
    BirthdateRequired,
    #[error("Birthdate must be between 1900-01-01 and today")]
    BirthdateOutOfRange,
    #[error("Passenger must be at least 2 years old")]
    TooYoung,
    #[error("At least one passenger must be 18 or older, please contact customer service")]
    NoAdult,
}

/// Misuse of the form outside of validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("passenger count must be 1, 2 or 3, got {0}")]
    InvalidCount(u8),
    #[error("no passenger count selected")]
    NoCountSelected,
    #[error("passenger count is locked once confirmed")]
    CountLocked,
    #[error("form is not accepting edits")]
    NotEditing,
    #[error("unknown passenger {0}")]
    UnknownPassenger(PassengerId),
    #[error("baggage slot {slot} out of range (passenger has {len})")]
    BaggageSlotOutOfRange { slot: usize, len: usize },
}

/// Why a submission was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form is not open for submission")]
    NotEditing,
    #[error("{count} field(s) failed validation")]
    InvalidFields { count: usize },
    #[error("no passenger is 18 or older")]
    NoAdult,
}

/// Field-level errors keyed by passenger identity
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    entries: BTreeMap<(PassengerId, Field), FieldError>,
}

impl FormErrors {
    pub fn get(&self, id: PassengerId, field: Field) -> Option<&FieldError> {
        self.entries.get(&(id, field))
    }

    pub fn insert(&mut self, id: PassengerId, field: Field, error: FieldError) {
        self.entries.insert((id, field), error);
    }

    pub fn remove(&mut self, id: PassengerId, field: Field) {
        self.entries.remove(&(id, field));
    }

    /// Store the error or clear the slot, depending on the outcome
    pub fn record<T>(&mut self, id: PassengerId, field: Field, outcome: Result<T, FieldError>) {
        match outcome {
            Ok(_) => self.remove(id, field),
            Err(e) => self.insert(id, field, e),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    let len = name.chars().count();
    if len < NAME_MIN_CHARS {
        Err(FieldError::NameTooShort)
    } else if len > NAME_MAX_CHARS {
        Err(FieldError::NameTooLong)
    } else {
        Ok(())
    }
}

/// Per-passenger birthdate rule: present, inside the picker range and at
/// least [`MIN_PASSENGER_AGE_YEARS`] before `today`.
pub fn validate_birthdate(birthdate: Option<NaiveDate>, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    let date = birthdate.ok_or(FieldError::BirthdateRequired)?;
    if date < earliest_birthdate() || date > today {
        return Err(FieldError::BirthdateOutOfRange);
    }
    if date > years_before(today, MIN_PASSENGER_AGE_YEARS) {
        return Err(FieldError::TooYoung);
    }
    Ok(date)
}

/// Run every per-field rule for one passenger
pub fn validate_passenger(passenger: &Passenger, today: NaiveDate) -> Vec<(Field, FieldError)> {
    let mut errors = Vec::new();
    if let Err(e) = validate_name(&passenger.name) {
        errors.push((Field::Name, e));
    }
    if let Err(e) = validate_birthdate(passenger.birthdate, today) {
        errors.push((Field::Birthdate, e));
    }
    errors
}

pub fn has_adult(passengers: &[Passenger], today: NaiveDate) -> bool {
    passengers.iter().any(|p| {
        p.birthdate
            .is_some_and(|d| age_in_years(d, today) >= ADULT_AGE_YEARS)
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormStage {
    #[default]
    SelectingCount,
    Editing,
    Accepted,
}

/// Outcome of an accepted booking
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub passengers: usize,
    pub extra_baggage_kg: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    stage: FormStage,
    passenger_count: Option<PassengerCount>,
    passengers: Vec<Passenger>,
    errors: FormErrors,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> FormStage {
        self.stage
    }

    pub fn passenger_count(&self) -> Option<PassengerCount> {
        self.passenger_count
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.id == id)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, id: PassengerId, field: Field) -> Option<&FieldError> {
        self.errors.get(id, field)
    }

    pub fn can_confirm(&self) -> bool {
        self.stage == FormStage::SelectingCount && self.passenger_count.is_some()
    }

    /// Choose how many passengers to book; always rebuilds the passenger list
    pub fn select_count(&mut self, count: PassengerCount) -> Result<(), BookingError> {
        if self.stage != FormStage::SelectingCount {
            return Err(BookingError::CountLocked);
        }
        self.passenger_count = Some(count);
        self.reset_passengers();
        Ok(())
    }

    /// Discard every passenger record and provision fresh ones
    pub fn reset_passengers(&mut self) {
        let count = self.passenger_count.map_or(0, PassengerCount::get);
        self.passengers = (0..count).map(|_| Passenger::new()).collect();
        self.errors.clear();
    }

    pub fn confirm_count(&mut self) -> Result<(), BookingError> {
        if self.stage != FormStage::SelectingCount {
            return Err(BookingError::CountLocked);
        }
        if self.passenger_count.is_none() {
            return Err(BookingError::NoCountSelected);
        }
        self.stage = FormStage::Editing;
        Ok(())
    }

    pub fn set_name(&mut self, id: PassengerId, name: impl Into<String>) -> Result<(), BookingError> {
        let passenger = self.editable(id)?;
        passenger.name = name.into();
        let outcome = validate_name(&passenger.name);
        self.errors.record(id, Field::Name, outcome);
        Ok(())
    }

    pub fn set_birthdate(
        &mut self,
        id: PassengerId,
        birthdate: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<(), BookingError> {
        let passenger = self.editable(id)?;
        passenger.birthdate = birthdate;
        self.errors.record(id, Field::Birthdate, validate_birthdate(birthdate, today));
        Ok(())
    }

    /// Append a baggage selector defaulting to "none"; returns its slot index
    pub fn add_baggage_slot(&mut self, id: PassengerId) -> Result<usize, BookingError> {
        let passenger = self.editable(id)?;
        passenger.baggage_add_ons.push(BaggageAddOn::None);
        Ok(passenger.baggage_add_ons.len() - 1)
    }

    pub fn set_baggage(&mut self, id: PassengerId, slot: usize, add_on: BaggageAddOn) -> Result<(), BookingError> {
        let passenger = self.editable(id)?;
        let len = passenger.baggage_add_ons.len();
        let entry = passenger
            .baggage_add_ons
            .get_mut(slot)
            .ok_or(BookingError::BaggageSlotOutOfRange { slot, len })?;
        *entry = add_on;
        Ok(())
    }

    /// Validate every passenger, then the adult rule; accept on success
    pub fn submit(&mut self, today: NaiveDate) -> Result<BookingSummary, SubmitError> {
        if self.stage != FormStage::Editing {
            return Err(SubmitError::NotEditing);
        }

        self.errors.clear();
        for passenger in &self.passengers {
            for (field, error) in validate_passenger(passenger, today) {
                self.errors.insert(passenger.id, field, error);
            }
        }
        if !self.errors.is_empty() {
            tracing::debug!(count = self.errors.len(), "booking_rejected_field_errors");
            return Err(SubmitError::InvalidFields { count: self.errors.len() });
        }

        if !has_adult(&self.passengers, today) {
            if let Some(first) = self.passengers.first() {
                self.errors.insert(first.id, Field::Birthdate, FieldError::NoAdult);
            }
            tracing::debug!("booking_rejected_no_adult");
            return Err(SubmitError::NoAdult);
        }

        self.stage = FormStage::Accepted;
        let summary = BookingSummary {
            passengers: self.passengers.len(),
            extra_baggage_kg: self.passengers.iter().map(Passenger::extra_baggage_kg).sum(),
        };
        tracing::info!(passengers = summary.passengers, extra_kg = summary.extra_baggage_kg, "booking_accepted");
        Ok(summary)
    }

    fn editable(&mut self, id: PassengerId) -> Result<&mut Passenger, BookingError> {
        if self.stage != FormStage::Editing {
            return Err(BookingError::NotEditing);
        }
        self.passengers
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BookingError::UnknownPassenger(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn editing_form(count: PassengerCount) -> BookingForm {
        let mut form = BookingForm::new();
        form.select_count(count).unwrap();
        form.confirm_count().unwrap();
        form
    }

    #[test]
    fn test_passenger_count_try_from() {
        assert_eq!(PassengerCount::try_from(1), Ok(PassengerCount::One));
        assert_eq!(PassengerCount::try_from(3), Ok(PassengerCount::Three));
        assert_eq!(PassengerCount::try_from(0), Err(BookingError::InvalidCount(0)));
        assert_eq!(PassengerCount::try_from(4), Err(BookingError::InvalidCount(4)));
    }

    #[test]
    fn test_baggage_form_values() {
        for add_on in BaggageAddOn::ALL {
            assert_eq!(BaggageAddOn::from_form_value(add_on.form_value()), Some(add_on));
        }
        assert_eq!(BaggageAddOn::from_form_value("add99"), None);
        assert_eq!(BaggageAddOn::default(), BaggageAddOn::None);
    }

    #[test]
    fn test_baggage_serde_uses_form_values() {
        let json = serde_json::to_string(&BaggageAddOn::Plus15Kg).unwrap();
        assert_eq!(json, "\"add15\"");
    }

    #[test]
    fn test_years_before_leap_day() {
        let leap = NaiveDate::from_ymd_opt(2028, 2, 29).unwrap();
        assert_eq!(years_before(leap, 2), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    }

    #[test]
    fn test_name_unicode_length() {
        assert!(validate_name("王大明").is_ok());
        assert!(validate_name(&"明".repeat(20)).is_ok());
        assert_eq!(validate_name(&"明".repeat(21)), Err(FieldError::NameTooLong));
    }

    #[test]
    fn test_birthdate_range() {
        let before_range = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
        assert_eq!(validate_birthdate(Some(before_range), today()), Err(FieldError::BirthdateOutOfRange));
        assert!(validate_birthdate(Some(earliest_birthdate()), today()).is_ok());

        let tomorrow = today().succ_opt().unwrap();
        assert_eq!(validate_birthdate(Some(tomorrow), today()), Err(FieldError::BirthdateOutOfRange));
        assert_eq!(validate_birthdate(None, today()), Err(FieldError::BirthdateRequired));
    }

    #[test]
    fn test_live_name_validation_clears_error() {
        let mut form = editing_form(PassengerCount::One);
        let id = form.passengers()[0].id;

        form.set_name(id, "").unwrap();
        assert_eq!(form.error(id, Field::Name), Some(&FieldError::NameTooShort));

        form.set_name(id, "Wang").unwrap();
        assert_eq!(form.error(id, Field::Name), None);
    }

    #[test]
    fn test_edits_rejected_before_confirm() {
        let mut form = BookingForm::new();
        form.select_count(PassengerCount::Two).unwrap();
        let id = form.passengers()[0].id;

        assert_eq!(form.set_name(id, "Wang"), Err(BookingError::NotEditing));
    }

    #[test]
    fn test_count_locked_after_confirm() {
        let mut form = editing_form(PassengerCount::Two);
        assert_eq!(form.select_count(PassengerCount::One), Err(BookingError::CountLocked));
        assert_eq!(form.passengers().len(), 2);
    }

    #[test]
    fn test_confirm_requires_count() {
        let mut form = BookingForm::new();
        assert!(!form.can_confirm());
        assert_eq!(form.confirm_count(), Err(BookingError::NoCountSelected));
    }

    #[test]
    fn test_baggage_slots() {
        let mut form = editing_form(PassengerCount::One);
        let id = form.passengers()[0].id;

        let slot = form.add_baggage_slot(id).unwrap();
        assert_eq!(slot, 1);
        form.set_baggage(id, 1, BaggageAddOn::Plus20Kg).unwrap();
        form.set_baggage(id, 0, BaggageAddOn::Plus15Kg).unwrap();

        let passenger = form.passenger(id).unwrap();
        assert_eq!(passenger.baggage_add_ons, vec![BaggageAddOn::Plus15Kg, BaggageAddOn::Plus20Kg]);
        assert_eq!(passenger.extra_baggage_kg(), 35);

        assert_eq!(
            form.set_baggage(id, 5, BaggageAddOn::Plus15Kg),
            Err(BookingError::BaggageSlotOutOfRange { slot: 5, len: 2 })
        );
    }

    #[test]
    fn test_unknown_passenger() {
        let mut form = editing_form(PassengerCount::One);
        let stranger = PassengerId::new();
        assert_eq!(form.set_name(stranger, "X"), Err(BookingError::UnknownPassenger(stranger)));
    }

    #[test]
    fn test_submit_after_accept_is_refused() {
        let mut form = editing_form(PassengerCount::One);
        let id = form.passengers()[0].id;
        form.set_name(id, "Wang").unwrap();
        form.set_birthdate(id, Some(years_before(today(), 30)), today()).unwrap();

        let summary = form.submit(today()).unwrap();
        assert_eq!(summary.passengers, 1);
        assert_eq!(form.stage(), FormStage::Accepted);
        assert_eq!(form.submit(today()), Err(SubmitError::NotEditing));
    }

    #[test]
    fn test_adult_rule_counts_calendar_years() {
        // Born late in the year: 17 by exact age, 18 by year difference
        let birthdate = NaiveDate::from_ymd_opt(2008, 12, 31).unwrap();
        assert_eq!(age_in_years(birthdate, today()), 18);

        let passenger = Passenger {
            birthdate: Some(birthdate),
            ..Passenger::new()
        };
        assert!(has_adult(&[passenger], today()));
    }
}
