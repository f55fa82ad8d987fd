use std::collections::HashSet;

use indexmap::IndexSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
  pub name: String,
  pub age: i32,
  pub address: Option<Address>,
  pub phones: Vec<String>,
  pub tags: HashSet<String>,
  pub nickname: Option<String>,
}

impl Person {
  pub fn new(
    name: String,
    age: i32,
    address: Option<Address>,
    phones: Vec<String>,
    tags: HashSet<String>,
    nickname: Option<String>,
  ) -> Self {
    Self {
      name,
      age,
      address,
      phones,
      tags,
      nickname,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
  pub street: String,
  pub city: String,
  pub zip: Option<String>,
}

impl Address {
  pub fn of(street: String, city: String, zip: Option<String>) -> Self {
    Self { street, city, zip }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
  pub name: String,
  pub leader: Option<Person>,
  pub members: Vec<Person>,
  pub keywords: Option<IndexSet<String>>,
}

impl Team {
  pub fn named(name: String) -> Self {
    Self {
      name,
      leader: None,
      members: vec![],
      keywords: None,
    }
  }

  pub fn new(name: String, leader: Person, members: Vec<Person>, keywords: Option<IndexSet<String>>) -> Self {
    Self {
      name,
      leader: Some(leader),
      members,
      keywords,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeled<T: Clone> {
  pub label: String,
  pub values: Vec<T>,
}

impl<T: Clone> Labeled<T> {
  pub fn new(label: String, values: Vec<T>) -> Self {
    Self { label, values }
  }
}
