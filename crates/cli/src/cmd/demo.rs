use std::time::Instant;

use anyhow::Result;
use docshelf_lib::Store;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::output::{format_duration, print_error, print_info, print_stat, print_success};

const COLLECTION: &str = "users";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Address {
  city: String,
  state: String,
  country: String,
  pincode: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct User {
  name: String,
  age: u32,
  contact: String,
  company: String,
  address: Address,
}

fn employee(name: &str, age: u32, company: &str, city: &str, state: &str, country: &str, pincode: u32) -> User {
  User {
    name: name.to_string(),
    age,
    contact: "3456532456".to_string(),
    company: company.to_string(),
    address: Address {
      city: city.to_string(),
      state: state.to_string(),
      country: country.to_string(),
      pincode,
    },
  }
}

fn employees() -> Vec<User> {
  vec![
    employee("Mikasa", 23, "cedar", "Bangalore", "ktaka", "india", 7654),
    employee("Johan", 27, "Google", "NYC", "NY", "USA", 356),
    employee("Maximilian", 28, "Microsoft", "Paris", "", "France", 9875),
    employee("Reiner", 34, "Remote", "Prague", "", "Czech Republic", 6568),
    employee("Eren", 29, "Domini", "Dubai", "", "Abu Dhabi", 899),
    employee("Erwin", 33, "Fidelity", "Pune", "Maha", "india", 432123),
  ]
}

/// Writes the sample employees, scans them back, decodes each and deletes
/// one. Failures are reported and the demo keeps going.
pub fn cmd_demo(store: &Store) -> Result<()> {
  let start = Instant::now();
  let mut failures = 0usize;

  let users = employees();
  let mut written = 0usize;
  for user in &users {
    match store.write(COLLECTION, &user.name, user) {
      Ok(()) => written += 1,
      Err(e) => {
        warn!(resource = %user.name, error = %e, "failed to write record");
        print_error(&format!("Failed to write {}: {}", user.name, e));
        failures += 1;
      }
    }
  }
  print_success(&format!("Wrote {} record(s) to {}", written, COLLECTION));

  let records = match store.read_all(COLLECTION) {
    Ok(records) => records,
    Err(e) => {
      print_error(&format!("Failed to read {}: {}", COLLECTION, e));
      failures += 1;
      Vec::new()
    }
  };

  for record in &records {
    print!("{}", record);
  }

  let mut decoded = Vec::with_capacity(records.len());
  for record in &records {
    match serde_json::from_str::<User>(record) {
      Ok(user) => decoded.push(user),
      Err(e) => {
        print_error(&format!("Failed to decode record: {}", e));
        failures += 1;
      }
    }
  }
  decoded.sort_by(|a, b| a.name.cmp(&b.name));
  for user in &decoded {
    debug!(?user, "decoded record");
    println!("{} ({}, {}) - {}", user.name, user.age, user.company, user.address.city);
  }

  match store.delete(COLLECTION, "Johan.json") {
    Ok(deleted) => print_success(&format!("Deleted {}", deleted.path().display())),
    Err(e) => {
      print_error(&e.to_string());
      failures += 1;
    }
  }

  println!();
  print_info("Demo complete");
  print_stat("Records read", &records.len().to_string());
  print_stat("Records decoded", &decoded.len().to_string());
  print_stat("Failures", &failures.to_string());
  print_stat("Duration", &format_duration(start.elapsed()));

  Ok(())
}
