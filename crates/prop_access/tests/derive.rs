use prop_access::derive::Property;
use prop_access::{FromValue, KeyKind, Object, PropertyAccessor, PropertyError, Value};

#[derive(Property, Clone, Debug, PartialEq)]
#[property(methods(get_full_name, is_admin, set_password))]
struct User {
    pub first: String,
    pub last: String,
    pub age: u8,
    password: String,
    admin: bool,
    #[property(skip)]
    pub cache: Vec<u8>,
    #[property(rename = "mail")]
    pub email: Option<String>,
}

impl User {
    fn get_full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    fn is_admin(&self) -> bool {
        self.admin
    }

    fn set_password(&mut self, password: String) {
        self.password = password;
    }
}

#[derive(Property, Clone, Debug, PartialEq)]
#[property(name = "app.Team", methods(getName))]
struct Team {
    pub lead: User,
    pub members: Vec<User>,
    pub tags: Vec<String>,
}

impl Team {
    #[expect(non_snake_case, reason = "accessor named after its runtime form")]
    fn getName(&self) -> &str {
        "core"
    }
}

#[derive(Property, Clone, Debug, PartialEq)]
struct Marker;

fn user(first: &str) -> User {
    User {
        first: first.into(),
        last: "Lee".into(),
        age: 30,
        password: "hunter2".into(),
        admin: true,
        cache: vec![1, 2, 3],
        email: None,
    }
}

fn team() -> Team {
    Team {
        lead: user("Ann"),
        members: vec![user("Bob"), user("Cy")],
        tags: vec!["x".into()],
    }
}

#[test]
fn object_metadata() {
    let user = user("Ann");

    assert_eq!(Object::type_name(&user), "User");
    assert_eq!(user.member_names(), ["first", "last", "age", "password", "admin", "mail"]);
    assert!(user.has_member("password"));
    assert!(!user.is_member_public("password"));
    assert!(user.is_member_public("first"));
    assert!(!user.has_member("cache"));
    assert!(!user.has_member("email"));

    assert!(user.has_method("getFullName"));
    assert!(user.has_method("isAdmin"));
    assert!(user.has_method("setPassword"));
    assert!(!user.has_method("getFirst"));

    assert_eq!(Object::type_name(&team()), "app.Team");
    assert!(Marker.member_names().is_empty());
    assert!(!Marker.has_method("getAnything"));
}

#[test]
fn members_and_getters() {
    let team = team();
    let accessor = PropertyAccessor::new();

    assert_eq!(accessor.get(&team, "lead.first").unwrap(), Value::from("Ann"));
    assert_eq!(accessor.get(&team, "lead.age").unwrap(), Value::Int(30));
    assert_eq!(accessor.get(&team, "lead.full_name").unwrap(), Value::from("Ann Lee"));
    assert_eq!(accessor.get(&team, "lead.fullName").unwrap(), Value::from("Ann Lee"));
    assert_eq!(accessor.get(&team, "lead.admin").unwrap(), Value::Bool(true));
    assert_eq!(accessor.get(&team, "lead.mail").unwrap(), Value::Null);
    assert_eq!(accessor.get(&team, "members.1.first").unwrap(), Value::from("Cy"));
    assert_eq!(accessor.get(&team, "name").unwrap(), Value::from("core"));
    assert_eq!(accessor.get(&team, ["tags", "0"]).unwrap(), Value::from("x"));
}

#[test]
fn read_failures() {
    let team = team();
    let accessor = PropertyAccessor::new();

    assert!(matches!(
        accessor.get(&team, "lead.password"),
        Err(PropertyError::NonAccessibleProperty { property, .. }) if property == "password"
    ));
    assert!(matches!(
        accessor.get(&team, "lead.cache"),
        Err(PropertyError::NonexistentKey { key, kind: KeyKind::Object, .. }) if key == "cache"
    ));
    assert!(matches!(
        accessor.get(&team, "members.5"),
        Err(PropertyError::NonexistentKey { kind: KeyKind::Map, .. })
    ));

    let err = accessor.get(&team, "lead.first.x.y").unwrap_err();
    assert!(matches!(
        err,
        PropertyError::InvalidSource { value: Value::String(_), ref path } if path == &["x", "y"]
    ));
    assert!(!accessor.can_get(&team, "lead.first.x"));
}

#[test]
fn writes() {
    let mut team = team();
    let accessor = PropertyAccessor::new();

    accessor.set(&mut team, "lead.first", "Dee").unwrap();
    accessor.set(&mut team, "lead.age", 41).unwrap();
    accessor.set(&mut team, "lead.password", "secret").unwrap();
    accessor.set(&mut team, "lead.mail", "dee@example.com").unwrap();
    accessor.set(&mut team, "members.0.last", "Ray").unwrap();
    accessor.set(&mut team, "tags.1", "y").unwrap();

    assert_eq!(team.lead.first, "Dee");
    assert_eq!(team.lead.age, 41);
    assert_eq!(team.lead.password, "secret");
    assert_eq!(team.lead.email.as_deref(), Some("dee@example.com"));
    assert_eq!(team.members[0].last, "Ray");
    assert_eq!(team.tags, ["x", "y"]);

    accessor.set(&mut team, "lead.mail", Value::Null).unwrap();
    assert_eq!(team.lead.email, None);
}

#[test]
fn write_failures() {
    let mut team = team();
    let accessor = PropertyAccessor::new();

    // Non-public member without a setter.
    assert!(matches!(
        accessor.set(&mut team, "lead.admin", false),
        Err(PropertyError::NonAccessibleProperty { .. })
    ));
    // Derived objects have a fixed set of members.
    assert!(matches!(
        accessor.set(&mut team, "lead.nickname", "A"),
        Err(PropertyError::NonexistentKey { kind: KeyKind::Object, .. })
    ));
    // Out of range for `u8`.
    assert!(matches!(
        accessor.set(&mut team, "lead.age", 300),
        Err(PropertyError::Mismatch { .. })
    ));
    assert!(matches!(
        accessor.set(&mut team, "lead.password", 1),
        Err(PropertyError::Mismatch { .. })
    ));
    assert!(matches!(
        accessor.set(&mut team, "lead.first.x", 1),
        Err(PropertyError::InvalidTarget { .. })
    ));

    assert_eq!(team, self::team());
}

#[test]
fn whole_objects() {
    let mut team = team();
    let accessor = PropertyAccessor::new();

    let lead = accessor.get(&team, "lead").unwrap();
    assert_eq!(lead.downcast_object_ref::<User>(), Some(&team.lead));

    let bob = accessor.get_as::<User>(&team, "members.0").unwrap();
    assert_eq!(bob.first, "Bob");

    accessor.set(&mut team, "lead", bob.clone()).unwrap();
    assert_eq!(team.lead, bob);

    assert!(matches!(
        accessor.set(&mut team, "lead", Value::Int(1)),
        Err(PropertyError::Mismatch { .. })
    ));
    assert!(User::from_value(Value::from(Marker)).is_err());
}

#[test]
fn values_compare_structurally() {
    let a = Value::from(user("Ann"));
    let b = Value::from(user("Ann"));
    assert_eq!(a, b);
    assert_ne!(a, Value::from(user("Bob")));
}
