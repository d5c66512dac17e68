use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::new("ab".chars());
    assert_eq!(s.curr(), None);
    assert_eq!(s.pos(), -1);
    assert_eq!(s.next(), Some('a'));
    assert_eq!(s.next(), Some('b'));
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
    assert_eq!(s.pos(), 2);
    assert_eq!(s.curr(), None);
}

#[test]
fn test_accept() {
    let mut s = Scanner::new("1+2".chars());
    assert_eq!(s.accept_any(&['+']), None);
    assert_eq!(s.curr(), None);
    assert_eq!(s.accept_any(&['1']), Some('1'));
    assert_eq!(s.accept_any(&['-', '*']), None);
    assert_eq!(s.curr(), Some('1'));
    assert_eq!(s.accept_if(|c| *c == '+'), Some('+'));
    assert_eq!(s.accept_if(|c| c.is_alphabetic()), None);
    assert_eq!(s.curr(), Some('+'));
    assert_eq!(s.next(), Some('2'));
    assert_eq!(s.accept_any(&['2']), None);
}

#[test]
fn test_skip_and_ignore() {
    let mut s = Scanner::new("   12".chars());
    assert!(s.skip_matching(|c| *c == ' '));
    assert!(!s.skip_matching(|c| *c == ' '));
    assert_eq!(s.curr(), Some(' '));
    s.ignore();
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('1'));
    s.ignore();
    assert_eq!(s.next(), Some('2'));
    s.ignore();
    assert_eq!(s.next(), None);
    s.ignore();
    assert_eq!(s.next(), None);
}

#[test]
fn test_set_pos() {
    let mut s = Scanner::new("abc".chars());
    let backtrack = s.pos();
    s.next();
    s.next();
    assert_eq!(s.curr(), Some('b'));
    assert!(s.set_pos(backtrack));
    assert_eq!(s.next(), Some('a'));
    assert!(!s.set_pos(10));
    assert!(!s.set_pos(-2));
    assert_eq!(s.curr(), Some('a'));
}
