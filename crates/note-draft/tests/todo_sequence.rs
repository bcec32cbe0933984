//! Todo Sequence Properties
//!
//! Long mixed runs of add/update/remove against a plain `Vec` model.

use note_draft::{NoteComposer, TodoDraftItem, TodoField};

/// Small deterministic generator so runs are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

#[test]
fn test_length_and_order_track_model() {
    for seed in 1..=20u64 {
        let mut rng = Lcg(seed);
        let mut composer = NoteComposer::new();
        let mut model = vec![TodoDraftItem::default()];
        let (mut adds, mut removes) = (0usize, 0usize);

        for step in 0..200 {
            match rng.below(3) {
                0 => {
                    composer.add_todo();
                    model.push(TodoDraftItem::default());
                    adds += 1;
                }
                1 => {
                    let index = rng.below(model.len() + 2);
                    let removed = composer.remove_todo_at(index);
                    if index < model.len() {
                        assert_eq!(removed, Some(model.remove(index)));
                        removes += 1;
                    } else {
                        assert_eq!(removed, None);
                    }
                }
                _ => {
                    let index = rng.below(model.len() + 2);
                    let title = format!("s{}-{}", seed, step);
                    let changed = composer.update_todo_at(index, TodoField::Title(title.clone()));
                    assert_eq!(changed, index < model.len());
                    if let Some(item) = model.get_mut(index) {
                        item.title = title;
                    }
                }
            }
            assert_eq!(composer.todos().len(), 1 + adds - removes);
            assert_eq!(composer.todos().items(), model);
        }
    }
}

#[test]
fn test_update_isolates_target_entry() {
    let mut composer = NoteComposer::new();
    composer.add_todo();
    composer.add_todo();
    composer.update_todo_at(0, TodoField::Title("a".into()));
    composer.update_todo_at(2, TodoField::Title("c".into()));
    let before = composer.todos().items();

    composer.update_todo_at(1, TodoField::IsComplete(true));
    let after = composer.todos().items();

    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1], TodoDraftItem::new("", true));
}

#[test]
fn test_id_addressed_edit_after_removal() {
    let mut composer = NoteComposer::new();
    let second = composer.add_todo();
    let third = composer.add_todo();
    composer.remove_todo_at(0);

    assert!(composer.update_todo(third, TodoField::Title("third".into())));
    assert_eq!(composer.todos().position(second), Some(0));
    assert_eq!(composer.todos().get(third).map(|t| t.title.as_str()), Some("third"));
    assert_eq!(composer.remove_todo(second), Some(TodoDraftItem::default()));
    assert!(composer.remove_todo(second).is_none());
}
