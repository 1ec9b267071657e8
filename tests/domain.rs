//! End-to-end behavior of the household model through the public API.

use household::models::{marry, Currency, Family, Job, Money, Person, Raise};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn usd_plus_usd_is_plain_sum() {
    let sum = Money::usd(5.0).add(&Money::usd(10.0));
    assert_close(sum.amount(), 15.0);
    assert_eq!(sum.currency(), &Currency::Usd);
}

#[test]
fn conversions_round_trip_for_every_pair() {
    for from in Currency::SUPPORTED {
        for to in Currency::SUPPORTED {
            let m = Money::new(15.0, from.clone());
            assert_close(m.convert(&to).convert(&from).amount(), 15.0);
        }
    }
}

#[test]
fn job_income_and_raises() {
    let hourly = Job::hourly("Guest Lecturer", 10.0);
    assert_eq!(hourly.annual_income(), 20000);

    let salaried = Job::salaried("Guest Lecturer", 1000);
    assert_eq!(salaried.calculate_income(2000), 1000);

    let mut job = Job::hourly("Janitor", 20.0);
    job.apply_raise(Raise::ByPercent(0.1));
    assert_close(job.wage().unwrap(), 22.0);
}

#[test]
fn age_gates_drop_assignments() {
    let mut matt = Person::new("Matt", "Neward", 15);
    assert!(!matt.set_job(Job::hourly("Burger-Flipper", 5.5)));
    assert!(matt.job().is_none());

    let mut teen = Person::new("Mike", "Neward", 17);
    let mut adult = Person::new("Jane", "Doe", 30);
    assert!(!marry(&mut teen, &mut adult));
    assert!(teen.spouse().is_none());
    assert!(adult.spouse().is_none());
}

#[test]
fn family_lifecycle() {
    let mut family = Family::new(
        Person::new("Ted", "Neward", 30),
        Person::new("Charlotte", "Neward", 28),
    )
    .unwrap();
    let ted_id = family.members()[0].id;
    let charlotte_id = family.members()[1].id;

    assert_eq!(family.member(ted_id).unwrap().spouse(), Some(charlotte_id));
    assert_eq!(family.member(charlotte_id).unwrap().spouse(), Some(ted_id));

    family
        .member_mut(ted_id)
        .unwrap()
        .set_job(Job::salaried("Gues Lecturer", 1000));
    family
        .member_mut(charlotte_id)
        .unwrap()
        .set_job(Job::hourly("Consultant", 10.0));

    let matt = Person::new("Matt", "Neward", 15);
    let matt_id = matt.id;
    assert!(family.have_child(matt));
    assert!(family.member(matt_id).is_some());

    // Matt is too young to work, so he adds nothing
    assert!(!family
        .member_mut(matt_id)
        .unwrap()
        .set_job(Job::hourly("Burger-Flipper", 5.5)));
    assert_eq!(family.household_income(), 21000);

    assert_eq!(
        family.describe_member(matt_id).unwrap(),
        "[Person: firstName: Matt lastName: Neward age: 15 job: nil spouse: nil]"
    );
}

#[test]
fn young_family_cannot_have_children() {
    let mut family = Family::new(
        Person::new("A", "Young", 21),
        Person::new("B", "Young", 18),
    )
    .unwrap();
    assert!(!family.have_child(Person::new("C", "Young", 0)));
    assert_eq!(family.len(), 2);
}
