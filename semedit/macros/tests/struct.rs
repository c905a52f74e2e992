use semedit::{every, index, left, EditError, Editable, Editor, EditorExt};

#[derive(Clone, Debug, PartialEq, Editable)]
struct Fields {
    a: i32,
    b: f32,
    c: String,
}

#[derive(Clone, Debug, PartialEq, Editable)]
struct Tuple(i32, f32, String);

#[derive(Clone, Debug, PartialEq, Editable)]
struct Attrs {
    #[edit(rename = "label")]
    name: String,
    #[edit(skip)]
    cache: Vec<u8>,
    r#type: u8,
}

impl Attrs {
    // would clash with a generated `name` constant without the rename
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, PartialEq, Editable)]
struct Library {
    shelves: Vec<Shelf>,
}

#[derive(Clone, Debug, PartialEq, Editable)]
struct Shelf {
    books: Vec<(String, u32)>,
}

#[test]
fn struct_check() {
    let fields = Fields {
        a: 1,
        b: 2.0,
        c: "third".to_string(),
    };
    let tup = Tuple(4, 5.0, "sixth".to_string());

    assert_eq!(
        Fields::a.edit(fields.clone(), |a| a + 10),
        Ok(Fields {
            a: 11,
            ..fields.clone()
        })
    );
    assert_eq!(Fields::b.edit(fields.clone(), |b| b * 2.0).unwrap().b, 4.0);
    assert_eq!(Fields::c.set(fields, "seventh".to_string()).unwrap().c, "seventh");

    assert_eq!(Tuple::elem_0.edit(tup.clone(), |x| -x).unwrap().0, -4);
    assert_eq!(
        Tuple::elem_2.edit(tup, |s| s.to_uppercase()),
        Ok(Tuple(4, 5.0, "SIXTH".to_string()))
    );
}

#[test]
fn field_attributes() {
    let attrs = Attrs {
        name: "x".to_string(),
        cache: vec![1],
        r#type: 7,
    };
    let attrs = Attrs::label.edit(attrs, |n| n + "y").unwrap();
    assert_eq!(attrs.name(), "xy");
    let attrs = Attrs::r#type.edit(attrs, |t| t + 1).unwrap();
    assert_eq!(attrs.r#type, 8);
    assert_eq!(attrs.cache, vec![1]);
}

#[test]
fn field_editors_compose() {
    let library = Library {
        shelves: vec![
            Shelf {
                books: vec![("dune".to_string(), 1965)],
            },
            Shelf {
                books: vec![("emma".to_string(), 1815), ("ubik".to_string(), 1969)],
            },
        ],
    };

    let titles = Library::shelves
        .then(every())
        .then(Shelf::books)
        .then(every())
        .then(left());
    let shouted = titles.edit(library.clone(), |t: String| t.to_uppercase()).unwrap();
    assert_eq!(shouted.shelves[1].books[1].0, "UBIK");
    assert_eq!(shouted.shelves[0].books[0], ("DUNE".to_string(), 1965));

    let missing = Library::shelves
        .then(index(0))
        .then(Shelf::books)
        .then(index(3))
        .try_edit(library, &|b: (String, u32)| Ok(b));
    assert_eq!(missing, Err(EditError::IndexOutOfRange { index: 3, len: 1 }));
}
